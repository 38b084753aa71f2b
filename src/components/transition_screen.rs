use yew::prelude::*;

use super::app::AudioHandle;
use super::lives_display::LivesDisplay;
use super::plant_view::PlantView;
use crate::audio::TRANSITION_MS;
use crate::model::{GameAction, GameState};
use crate::state::Timeline;
use crate::util::shuffled_order;

const GROW_AT_MS: u32 = 1000;
const WATERING_END_MS: u32 = 1500;
const WILT_MS: u32 = 1500;
const HEART_FALL_MS: u32 = 1000;

#[derive(Properties, PartialEq, Clone)]
pub struct TransitionScreenProps {
    pub game: UseReducerHandle<GameState>,
}

/// Between questions: lives, the plant reacting to the last answer, and the jingle.
#[function_component(TransitionScreen)]
pub fn transition_screen(props: &TransitionScreenProps) -> Html {
    let audio = use_context::<AudioHandle>();
    let game = &props.game;
    let grew = game.last_outcome.is_some_and(|o| o.correct);
    let missed = game.last_outcome.is_some_and(|o| !o.correct);

    // The reducer has already counted the new level; show the old one until the water lands.
    let shown_growth = {
        let growth = game.plant_growth;
        use_state(move || if grew { growth.saturating_sub(1) } else { growth })
    };
    let watering = use_state(move || grew);
    let wilting = use_state(move || missed);
    let falling_heart = {
        let lives = game.lives;
        use_state(move || missed.then_some(lives))
    };

    {
        let game = props.game.clone();
        let shown_growth = shown_growth.clone();
        let watering = watering.clone();
        let wilting = wilting.clone();
        let falling_heart = falling_heart.clone();
        use_effect_with((), move |_| {
            if let Some(audio) = &audio {
                audio.jingle();
            }
            let speed = game.speed;
            let mut timeline = Timeline::new();
            if grew {
                let growth = game.plant_growth;
                timeline
                    .at(speed.scale_ms(GROW_AT_MS), move || shown_growth.set(growth))
                    .at(speed.scale_ms(WATERING_END_MS), move || watering.set(false));
            }
            if missed {
                timeline
                    .at(speed.scale_ms(WILT_MS), move || wilting.set(false))
                    .at(HEART_FALL_MS, move || falling_heart.set(None));
            }
            let choices = game.current_question().map(|q| q.choices.len()).unwrap_or(0);
            timeline.at(speed.scale_ms(TRANSITION_MS), move || {
                game.dispatch(GameAction::ShowQuestion { order: shuffled_order(choices) })
            });
            move || drop(timeline)
        });
    }

    html! {
        <div id="lifeScreen" class="screen life-screen">
            <LivesDisplay lives={game.lives} falling={*falling_heart} />
            <PlantView growth={*shown_growth} speed={game.speed} watering={*watering} wilting={*wilting} />
            <div id="nextQuestionDisplay" class="next-question">{ game.next_label() }</div>
        </div>
    }
}
