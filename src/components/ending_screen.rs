use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::model::{GameAction, GameState, Phase, ENDING_LINES};

const LINE_STEP_MS: u32 = 1800;

#[derive(Properties, PartialEq, Clone)]
pub struct EndingScreenProps {
    pub game: UseReducerHandle<GameState>,
    pub restart: Callback<()>,
}

#[function_component(EndingScreen)]
pub fn ending_screen(props: &EndingScreenProps) -> Html {
    let revealed = match props.game.phase {
        Phase::Ending { revealed } => revealed,
        _ => 0,
    };
    {
        let game = props.game.clone();
        let step = props.game.speed.scale_ms(LINE_STEP_MS);
        use_effect_with((), move |_| {
            let ticker = Interval::new(step, move || game.dispatch(GameAction::RevealLine));
            move || drop(ticker)
        });
    }
    let title_ready = revealed > ENDING_LINES.len();
    let on_title = {
        let restart = props.restart.clone();
        Callback::from(move |_: MouseEvent| restart.emit(()))
    };

    html! {
        <div id="endingScreen" class="screen ending-screen">
            <div id="endingTextContainer" class="ending-lines">
                { for ENDING_LINES.iter().enumerate().map(|(i, line)| html! {
                    <div class={classes!("pixel-card", "ending-line", (i < revealed).then_some("shown"))}>{ *line }</div>
                }) }
            </div>
            <button
                id="titleButton"
                class={classes!("pixel-button", "title-button", title_ready.then_some("shown"))}
                disabled={!title_ready}
                onclick={on_title}
            >{"タイトルに戻る"}</button>
        </div>
    }
}
