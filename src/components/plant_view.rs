use yew::prelude::*;

use crate::model::Speed;
use crate::plant::{self, Decoration, Scene, BASE_Y, STEM_WIDTH, STEM_X};

const STEM_FILL: &str = "#22C55E";
const STEM_STROKE: &str = "#166534";

pub fn pot_svg() -> Html {
    html! {
        <g transform="translate(25, 0)">
            <path fill="#000" d="M33 148 H67 V149 H68 V150 H69 V171 H68 V172 H65 V173 H35 V172 H32 V171 H31 V150 H32 V149 H33 V148"/>
            <path fill="#d97706" d="M34 149 H66 V150 H34 V149 M33 150 H32 V171 H33 V150 M67 150 H68 V171 H67 V150 M35 172 H65 V171 H35 V172"/>
            <path fill="#f59e0b" d="M34 150 H66 V171 H34 V150"/>
        </g>
    }
}

/// Leaf pair at the soil line; callers translate it to the stem tip.
pub fn leaves_svg() -> Html {
    let y = BASE_Y;
    html! {
        <>
            <path d={format!("M73 {} q -15 -5 -25 -20 q -5 -10 0 -15 q 5 5 15 10 q 15 10 10 25 Z", y - 5.0)} fill="#000"/>
            <path d={format!("M72 {} q -15 -5 -25 -20 q -5 -10 0 -15 q 5 5 15 10 q 15 10 10 25 Z", y - 6.0)} fill={STEM_FILL}/>
            <path d={format!("M72 {} q -10 -5 -15 -15", y - 6.0)} stroke={STEM_STROKE} stroke-width="1.5" fill="none"/>
            <path d={format!("M77 {} q 15 -5 25 -20 q 5 -10 0 -15 q -5 5 -15 10 q -15 10 -10 25 Z", y - 5.0)} fill="#000"/>
            <path d={format!("M78 {} q 15 -5 25 -20 q 5 -10 0 -15 q -5 5 -15 10 q -15 10 -10 25 Z", y - 6.0)} fill={STEM_FILL}/>
            <path d={format!("M78 {} q 10 -5 15 -15", y - 6.0)} stroke={STEM_STROKE} stroke-width="1.5" fill="none"/>
        </>
    }
}

/// Stem rect; `transition` eases it when `growth` changes in place.
pub fn stem_svg(growth: u32, transition: Option<String>) -> Html {
    html! {
        <rect
            id="plantStem"
            x={STEM_X.to_string()}
            y={plant::stem_top(growth).to_string()}
            width={STEM_WIDTH.to_string()}
            height={plant::stem_height(growth).to_string()}
            fill={STEM_FILL}
            stroke={STEM_STROKE}
            stroke-width="1"
            style={transition}
        />
    }
}

pub fn decoration_svg(decoration: &Decoration) -> Html {
    match *decoration {
        Decoration::Flower { x, y } => html! {
            <g transform={format!("translate({}, {}) scale(0.8)", x - 10.0, y - 10.0)}>
                <circle cx="15" cy="15" r="5" fill="#FBBF24"/>
                <circle cx="15" cy="5" r="4" fill="#F87171"/>
                <circle cx="23" cy="10" r="4" fill="#F87171"/>
                <circle cx="23" cy="20" r="4" fill="#F87171"/>
                <circle cx="15" cy="25" r="4" fill="#F87171"/>
                <circle cx="7" cy="20" r="4" fill="#F87171"/>
                <circle cx="7" cy="10" r="4" fill="#F87171"/>
            </g>
        },
        Decoration::Butterfly { x, y } => html! {
            <g transform={format!("translate({}, {}) scale(0.8)", x, y)}>
                <rect x="14" y="10" width="2" height="10" fill="#654321"/>
                <path d="M15 10 Q 5 0, 0 10 Q 5 20, 15 20 Z" fill="#E91E63"/>
                <path d="M15 10 Q 25 0, 30 10 Q 25 20, 15 20 Z" fill="#E91E63"/>
                <circle cx="10" cy="10" r="2" fill="#FFEB3B"/>
                <circle cx="20" cy="10" r="2" fill="#FFEB3B"/>
            </g>
        },
        Decoration::Dragonfly { x, y } => html! {
            <g transform={format!("translate({}, {}) scale(0.8)", x, y)}>
                <rect x="14" y="0" width="2" height="25" fill="#22C55E"/>
                <ellipse cx="10" cy="8" rx="8" ry="4" fill="#A5F3FC" opacity="0.7"/>
                <ellipse cx="10" cy="18" rx="8" ry="4" fill="#A5F3FC" opacity="0.7"/>
                <ellipse cx="20" cy="8" rx="8" ry="4" fill="#A5F3FC" opacity="0.7"/>
                <ellipse cx="20" cy="18" rx="8" ry="4" fill="#A5F3FC" opacity="0.7"/>
                <circle cx="15" cy="-2" r="3" fill="#000"/>
            </g>
        },
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlantViewProps {
    pub growth: u32,
    pub speed: Speed,
    #[prop_or_default]
    pub watering: bool,
    #[prop_or_default]
    pub wilting: bool,
}

/// The potted plant shown between questions.
#[function_component(PlantView)]
pub fn plant_view(props: &PlantViewProps) -> Html {
    let growth = props.growth;
    let secs = props.speed.scale_secs(0.5);
    let ease = format!("{}s ease-out", secs);
    let height = plant::stem_height(growth);
    let leaves_style = if props.wilting {
        format!("transition: transform {}; {}", ease, plant::wilt_vars(growth))
    } else {
        format!("transition: transform {};", ease)
    };
    let effect_class = if props.watering {
        Some("grow")
    } else if props.wilting {
        Some("wilt")
    } else {
        None
    };

    html! {
        <div class="plant-stage">
            if props.watering {
                <div id="wateringCan" class="watering-can animate">{"🚿"}</div>
            }
            <div id="plantEffect" class={classes!("plant-effect", effect_class, effect_class.is_none().then_some("hidden"))}></div>
            <svg class="plant-svg" viewBox="0 0 150 180" width="150" height="180">
                <g id="plantGroup"
                    transform={format!("translate(0, {})", plant::pan_offset(growth))}
                    style={format!("transition: transform {};", ease)}>
                    <g id="flowersContainer">
                        { for plant::decorations(growth, Scene::Live).iter().map(decoration_svg) }
                    </g>
                    { stem_svg(growth, Some(plant::stem_transition(secs))) }
                    <g id="plantLeaves"
                        class={classes!("plant-leaves", props.wilting.then_some("wilt"))}
                        transform={format!("translate(0, {})", -height)}
                        style={leaves_style}>
                        { leaves_svg() }
                    </g>
                    { pot_svg() }
                </g>
            </svg>
        </div>
    }
}
