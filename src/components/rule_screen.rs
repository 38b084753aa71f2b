use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::model::{GameAction, GameState, Phase, RULE_LINES};

const BUBBLE_STEP_MS: u32 = 1200;

#[derive(Properties, PartialEq, Clone)]
pub struct RuleScreenProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(RuleScreen)]
pub fn rule_screen(props: &RuleScreenProps) -> Html {
    let revealed = match props.game.phase {
        Phase::Rules { revealed } => revealed,
        _ => 0,
    };
    {
        let game = props.game.clone();
        let step = props.game.speed.scale_ms(BUBBLE_STEP_MS);
        use_effect_with((), move |_| {
            let ticker = Interval::new(step, move || game.dispatch(GameAction::RevealLine));
            move || drop(ticker)
        });
    }
    let confirm_ready = revealed > RULE_LINES.len();
    let on_confirm = {
        let game = props.game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::ConfirmRules))
    };

    html! {
        <div class="screen rule-screen">
            <div class="rule-cat">{"🐱"}</div>
            <div id="speechBubbles" class="speech-bubbles">
                { for RULE_LINES.iter().enumerate().map(|(i, line)| html! {
                    <div class={classes!("speech-bubble", (i < revealed).then_some("shown"))}>{ *line }</div>
                }) }
            </div>
            <button
                class={classes!("pixel-button", "rule-confirm", confirm_ready.then_some("shown"))}
                disabled={!confirm_ready}
                onclick={on_confirm}
            >{"わかった！"}</button>
        </div>
    }
}
