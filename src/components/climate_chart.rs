use yew::prelude::*;

use crate::chart::{self, ClimateZone, Rect, AXIS_X, AXIS_Y, CHART_HEIGHT, CHART_WIDTH};

const TEMP_COLOR: &str = "#F87171";
const PRECIP_COLOR: &str = "#60A5FA";
const AXIS_COLOR: &str = "#F9E076";
const FONT: &str = "font-family: 'RocknRoll One';";

#[derive(Properties, PartialEq, Clone)]
pub struct ClimateChartProps {
    pub code: AttrValue,
}

fn rect_svg(r: &Rect, fill: &'static str) -> Html {
    html! {
        <rect x={r.x.to_string()} y={r.y.to_string()} width={r.width.to_string()} height={r.height.to_string()} fill={fill}/>
    }
}

#[function_component(ClimateChart)]
pub fn climate_chart(props: &ClimateChartProps) -> Html {
    let Some(zone) = ClimateZone::from_code(&props.code) else {
        return html! {
            <div class="chart-missing pixel-border">{ format!("雨温図が見つかりません ({})", props.code) }</div>
        };
    };
    let layout = chart::layout(zone);
    let axis_len = chart::axis_length();

    html! {
        <svg width={CHART_WIDTH.to_string()} height={CHART_HEIGHT.to_string()} class="climate-chart pixel-border">
            <rect width={CHART_WIDTH.to_string()} height={CHART_HEIGHT.to_string()} fill="#4A249D"/>
            <rect x={AXIS_X.to_string()} y={AXIS_Y.to_string()} width={axis_len.to_string()} height="3" fill={AXIS_COLOR}/>
            <rect x={AXIS_X.to_string()} y="30" width="3" height={(AXIS_Y - 27.0).to_string()} fill={AXIS_COLOR}/>
            { for layout.month_labels.iter().map(|l| html! {
                <text x={l.x.to_string()} y="200" text-anchor="middle" class="chart-label" style={FONT}>{ l.text }</text>
            }) }
            { for layout.precip_bars.iter().map(|r| rect_svg(r, PRECIP_COLOR)) }
            { for layout.temp_markers.iter().map(|r| rect_svg(r, TEMP_COLOR)) }
            <rect x="40" y="15" width="12" height="3" fill={TEMP_COLOR}/>
            <text x="55" y="22" class="chart-label" style={FONT}>{"気温"}</text>
            <rect x="120" y="15" width="8" height="8" fill={PRECIP_COLOR}/>
            <text x="132" y="22" class="chart-label" style={FONT}>{"降水量"}</text>
        </svg>
    }
}
