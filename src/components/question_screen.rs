use gloo::timers::callback::Interval;
use yew::prelude::*;

use super::app::AudioHandle;
use super::climate_chart::ClimateChart;
use crate::audio::Sfx;
use crate::model::{ChoiceMark, GameAction, GameState, Phase, QuestionKind, TIME_LIMIT_SECS};
use crate::state::Timeline;

const TICK_MS: u32 = 1000;
const SYMBOL_MS: u32 = 1000;
const EXPLOSION_MS: u32 = 400;
const NEXT_STEP_MS: u32 = 1500;
const BUTTON_COLORS: [&str; 4] = ["bg-red-500", "bg-blue-500", "bg-yellow-500", "bg-green-500"];

#[derive(Properties, PartialEq, Clone)]
pub struct QuestionScreenProps {
    pub game: UseReducerHandle<GameState>,
}

#[function_component(QuestionScreen)]
pub fn question_screen(props: &QuestionScreenProps) -> Html {
    let audio = use_context::<AudioHandle>();
    let game = &props.game;
    let outcome = match game.phase {
        Phase::Answered(o) => Some(o),
        _ => None,
    };
    let speed = game.speed;
    let show_symbol = use_state(|| false);
    let exploding = use_state(|| false);

    // Countdown timer; stops as soon as the question is answered
    {
        let game = props.game.clone();
        use_effect_with(outcome.is_some(), move |&answered| {
            let ticker = (!answered).then(|| {
                Interval::new(speed.scale_ms(TICK_MS), move || game.dispatch(GameAction::TimerTick))
            });
            move || drop(ticker)
        });
    }
    {
        let audio = audio.clone();
        use_effect_with(game.time_left, move |&left| {
            if left < TIME_LIMIT_SECS {
                if let Some(audio) = &audio {
                    audio.tick();
                }
            }
            || ()
        });
    }
    // Judgement: sound, overlay, explosion on time-out, then the next step
    {
        let game = props.game.clone();
        let show_symbol = show_symbol.clone();
        let exploding = exploding.clone();
        use_effect_with(outcome, move |outcome| {
            let mut timeline = Timeline::new();
            if let Some(o) = *outcome {
                if let Some(audio) = &audio {
                    audio.play(if o.correct { Sfx::Correct } else { Sfx::Incorrect });
                }
                show_symbol.set(true);
                timeline.at(speed.scale_ms(SYMBOL_MS), move || show_symbol.set(false));
                if o.timed_out() {
                    exploding.set(true);
                    timeline.at(speed.scale_ms(EXPLOSION_MS), move || exploding.set(false));
                }
                timeline.at(speed.scale_ms(NEXT_STEP_MS), move || game.dispatch(GameAction::Advance));
            }
            move || drop(timeline)
        });
    }

    let Some(question) = game.current_question() else {
        return html! {};
    };

    let content = match question.kind {
        QuestionKind::Climate => html! {
            <ClimateChart code={AttrValue::from(question.climate_code().unwrap_or_default().to_string())} />
        },
        QuestionKind::Image => html! {
            <img src={question.content.clone()} alt="問題画像" class="question-image pixel-border" />
        },
    };

    let buttons = game.choice_order.iter().enumerate().map(|(pos, &choice)| {
        let mark = outcome.map_or(ChoiceMark::Plain, |o| o.mark(choice, question.correct));
        let wrong_pick = mark == ChoiceMark::Wrong;
        let onclick = {
            let game = props.game.clone();
            Callback::from(move |_: MouseEvent| game.dispatch(GameAction::Answer { choice }))
        };
        html! {
            <button
                class={classes!("choice-btn", "pixel-button", BUTTON_COLORS[pos % BUTTON_COLORS.len()],
                    (mark == ChoiceMark::Correct).then_some("choice-correct"),
                    wrong_pick.then_some("choice-wrong"),
                    wrong_pick.then_some("shake"))}
                disabled={outcome.is_some()}
                {onclick}
            >{ question.choices.get(choice).cloned().unwrap_or_default() }</button>
        }
    });

    let percent = game.timer_fraction() * 100.0;
    let (symbol, symbol_color) = match outcome {
        Some(o) if o.correct => ("○", "#f87171"),
        _ => ("×", "#60a5fa"),
    };

    html! {
        <div id="gameScreen" class="screen game-screen">
            <div class="timer">
                <div id="timerBar" class="timer-bar" style={format!("width: {}%;", percent)}></div>
                <div id="spark" class="spark" style={format!("left: calc({}% - 12px);", percent)}></div>
            </div>
            <h2 id="questionText" class="question-text">{ question.title.clone() }</h2>
            <div id="questionContent" class="question-content">{ content }</div>
            <div class="choices">{ for buttons }</div>
            if *exploding {
                <div id="explosionEffect" class="explosion"></div>
            }
            if *show_symbol {
                <div id="resultOverlay" class="result-overlay">
                    <div id="resultSymbol" class="result-symbol" style={format!("color: {};", symbol_color)}>{ symbol }</div>
                </div>
            }
        </div>
    }
}
