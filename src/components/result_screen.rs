use yew::prelude::*;

use super::app::AudioHandle;
use super::plant_view::{decoration_svg, leaves_svg, pot_svg, stem_svg};
use crate::audio::Sfx;
use crate::model::GameState;
use crate::plant::{self, Scene};

#[derive(Properties, PartialEq, Clone)]
pub struct ResultScreenProps {
    pub game: UseReducerHandle<GameState>,
    pub restart: Callback<()>,
    pub show_ending: Callback<()>,
}

fn final_plant(growth: u32) -> Html {
    let layout = plant::final_layout(growth);
    html! {
        <svg id="finalPlantSvg" class="final-plant-svg" viewBox={format!("0 0 150 {}", layout.view_height)} preserveAspectRatio="xMidYMax meet">
            <g transform={format!("translate(0, {})", layout.y_translate)}>
                { for plant::decorations(growth, Scene::Final).iter().map(decoration_svg) }
                { stem_svg(growth, None) }
                <g transform={format!("translate(0, {})", -plant::stem_height(growth))}>
                    { leaves_svg() }
                </g>
                { pot_svg() }
            </g>
        </svg>
    }
}

fn measure(cm: u32) -> Html {
    html! {
        <div id="plantMeasure" class="plant-measure">
            { for plant::measure_ticks(cm).into_iter().map(|tick| html! {
                <div class="measure-tick" style={format!("bottom: {}%;", tick.bottom_percent)}>
                    <span class="measure-label">{ tick.label }</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(ResultScreen)]
pub fn result_screen(props: &ResultScreenProps) -> Html {
    let audio = use_context::<AudioHandle>();
    let game = &props.game;
    {
        let game_over = game.is_game_over();
        use_effect_with((), move |_| {
            if game_over {
                if let Some(audio) = &audio {
                    audio.play(Sfx::GameOver);
                }
            }
            || ()
        });
    }

    let growth = game.plant_growth;
    let cm = plant::height_cm(growth);
    let perfect = game.is_perfect();
    let on_button = {
        let restart = props.restart.clone();
        let show_ending = props.show_ending.clone();
        Callback::from(move |_: MouseEvent| {
            if perfect {
                show_ending.emit(());
            } else {
                restart.emit(());
            }
        })
    };

    html! {
        <div id="resultScreen" class="screen result-screen">
            <div id="resultTitle" class="result-title">
                if game.is_game_over() {
                    <div class="game-over-text">{ game.result_title() }</div>
                } else {
                    { game.result_title() }
                }
            </div>
            <p class="result-score">{ format!("{} / {} 問正解", game.score, game.question_count()) }</p>
            <p id="resultMessage" class="result-message">{ game.result_message() }</p>
            <div id="finalPlantContainer" class="final-plant-container"
                style={format!("height: {}px;", plant::container_height_px(growth))}>
                { measure(cm) }
                { final_plant(growth) }
            </div>
            <div id="plantHeightText" class="plant-height">{ format!("{}cm", cm) }</div>
            <button id="restartBtn" class="pixel-button restart-button" onclick={on_button}>
                { if perfect { "エンディングへ" } else { "もう一度！" } }
            </button>
        </div>
    }
}
