use gloo::timers::callback::Interval;
use yew::prelude::*;

use super::app::AudioHandle;
use crate::audio::Sfx;
use crate::model::{CountdownStep, GameAction, GameState, Phase};

const COUNTDOWN_STEP_MS: u32 = 1000;

#[derive(Properties, PartialEq, Clone)]
pub struct TitleScreenProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(TitleScreen)]
pub fn title_screen(props: &TitleScreenProps) -> Html {
    let audio = use_context::<AudioHandle>();
    let step = match props.game.phase {
        Phase::Countdown(step) => Some(step),
        _ => None,
    };
    let speed = props.game.speed;

    // Countdown ticker: 3, 2, 1, start, then on to the rules
    {
        let game = props.game.clone();
        use_effect_with((step.is_some(), speed), move |&(counting, speed)| {
            let ticker = counting.then(|| {
                Interval::new(speed.scale_ms(COUNTDOWN_STEP_MS), move || {
                    game.dispatch(GameAction::CountdownTick)
                })
            });
            move || drop(ticker)
        });
    }
    {
        let audio = audio.clone();
        use_effect_with(step, move |step| {
            if let Some(audio) = &audio {
                match step {
                    Some(CountdownStep::Number(_)) => audio.play(Sfx::CountdownBeat),
                    Some(CountdownStep::Go) => audio.play(Sfx::CountdownGo),
                    _ => {}
                }
            }
            || ()
        });
    }

    let on_start = {
        let game = props.game.clone();
        let audio = audio.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(audio) = &audio {
                audio.init();
            }
            game.dispatch(GameAction::StartCountdown);
        })
    };
    let on_speed = {
        let game = props.game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::CycleSpeed))
    };
    // Hidden hotspot in the top-left corner that jumps straight to the ending
    let on_debug_ending = {
        let game = props.game.clone();
        Callback::from(move |_: MouseEvent| game.dispatch(GameAction::ShowEnding))
    };

    html! {
        <div class="screen title-screen">
            <div class="debug-ending-trigger" onclick={on_debug_ending}></div>
            <h1 class="title-logo">{"地理クイズ"}</h1>
            <p class="title-sub">{"正解して植物を育てるニャ！"}</p>
            if step.is_none() {
                <div class="title-buttons">
                    <button class="pixel-button start-button" onclick={on_start}>{"スタート"}</button>
                    <button class="pixel-button speed-button" onclick={on_speed}>{ speed.label() }</button>
                </div>
            }
            <div class="countdown-display">{ step.map(CountdownStep::display).unwrap_or_default() }</div>
        </div>
    }
}
