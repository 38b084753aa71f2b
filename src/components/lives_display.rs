use yew::prelude::*;

use crate::model::START_LIVES;

const HEART_PATH: &str = "M16 28.7c-5.4-4.8-12-8.5-12-14.2 0-3.6 2.2-6.5 6-6.5 3.3 0 6 2.7 6 2.7s2.7-2.7 6-2.7c3.8 0 6 2.9 6 6.5 0 5.7-6.6 9.4-12 14.2z";

fn heart_svg(slot: u32, lost: bool) -> Html {
    let gradient_id = format!("gold-gradient-{}", slot);
    let clip_id = format!("heart-clip-{}", slot);
    let fill = if lost { "#1F2937".to_string() } else { format!("url(#{})", gradient_id) };
    html! {
        <svg width="80" height="80" viewBox="0 0 32 32">
            <defs>
                <linearGradient id={gradient_id} x1="0%" y1="0%" x2="0%" y2="100%">
                    <stop offset="0%" style="stop-color:#FFDF00;" />
                    <stop offset="100%" style="stop-color:#B8860B;" />
                </linearGradient>
                <clipPath id={clip_id.clone()}>
                    <path d={HEART_PATH}/>
                </clipPath>
            </defs>
            <path fill={fill} stroke="#422c09" stroke-width="1.5" d={HEART_PATH}/>
            if !lost {
                <g clip-path={format!("url(#{})", clip_id)}>
                    <rect class="golden-heart-glint" x="-32" y="0" width="16" height="32" fill="rgba(255, 255, 255, 0.5)"/>
                </g>
            }
        </svg>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LivesDisplayProps {
    pub lives: u32,
    /// Slot of a heart lost just now; it drops out of its place.
    #[prop_or_default]
    pub falling: Option<u32>,
}

#[function_component(LivesDisplay)]
pub fn lives_display(props: &LivesDisplayProps) -> Html {
    html! {
        <div id="livesContainer" class="lives">
            { for (0..START_LIVES).map(|slot| {
                let lost = slot >= props.lives;
                html! {
                    <div class="heart-slot">
                        { heart_svg(slot, lost) }
                        if props.falling == Some(slot) {
                            <div class="heart-fall">{ heart_svg(slot + START_LIVES, false) }</div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
