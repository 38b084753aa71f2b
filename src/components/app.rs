use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    ending_screen::EndingScreen, question_screen::QuestionScreen, result_screen::ResultScreen,
    rule_screen::RuleScreen, title_screen::TitleScreen, transition_screen::TransitionScreen,
};
use crate::audio::{AudioManager, Sfx};
use crate::loader::{fetch_questions, QUESTIONS_URL};
use crate::model::{GameAction, GameState, Phase};
use crate::state::{load_speed, save_speed};
use crate::util::{cerror, clog, shuffle};

// Shared sound player (so screens can play effects without prop drilling)
#[derive(Clone)]
pub struct AudioHandle(pub Rc<RefCell<AudioManager>>);

impl PartialEq for AudioHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AudioHandle {
    pub fn init(&self) {
        self.0.borrow_mut().init();
    }

    pub fn play(&self, sfx: Sfx) {
        self.0.borrow().play(sfx);
    }

    pub fn tick(&self) {
        self.0.borrow().play_tick();
    }

    pub fn jingle(&self) {
        self.0.borrow().play_transition_jingle();
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::default);
    let audio = use_mut_ref(AudioManager::default);

    // Restore settings, then load the question file
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            if let Some(speed) = load_speed() {
                game.dispatch(GameAction::SetSpeed(speed));
            }
            spawn_local(async move {
                match fetch_questions(QUESTIONS_URL).await {
                    Ok(mut questions) => {
                        clog(&format!("loaded {} questions", questions.len()));
                        shuffle(&mut questions);
                        game.dispatch(GameAction::Loaded { questions });
                    }
                    Err(e) => {
                        cerror(&format!("failed to load {}: {}", QUESTIONS_URL, e));
                        game.dispatch(GameAction::LoadFailed { message: e.to_string() });
                    }
                }
            });
            || ()
        });
    }
    // Keep audio tempo in step with the speed setting and persist it
    {
        let audio = audio.clone();
        use_effect_with(game.speed, move |speed| {
            audio.borrow_mut().set_speed(speed.level());
            save_speed(*speed);
            || ()
        });
    }
    {
        use_effect_with(game.phase.clone(), move |phase| {
            clog(&format!("phase: {:?}", phase));
            || ()
        });
    }

    let restart = {
        let game = game.clone();
        Callback::from(move |_: ()| {
            let mut questions = (*game.questions).clone();
            shuffle(&mut questions);
            game.dispatch(GameAction::Restart { questions });
        })
    };
    let show_ending = {
        let game = game.clone();
        Callback::from(move |_: ()| game.dispatch(GameAction::ShowEnding))
    };

    let content = match &game.phase {
        Phase::Loading => html! {
            <div class="screen center-screen"><p class="loading">{"読み込み中…"}</p></div>
        },
        Phase::LoadFailed(message) => html! {
            <div class="load-error">
                {"エラー: 問題ファイル(questions.json)を読み込めませんでした。"}<br/>
                {"ファイルが正しい場所にあるか確認してください。"}
                <div class="load-error-detail">{ message.clone() }</div>
            </div>
        },
        Phase::Title | Phase::Countdown(_) => html! { <TitleScreen game={game.clone()} /> },
        Phase::Rules { .. } => html! { <RuleScreen game={game.clone()} /> },
        Phase::Transition => html! { <TransitionScreen game={game.clone()} /> },
        Phase::Question | Phase::Answered(_) => html! { <QuestionScreen game={game.clone()} /> },
        Phase::Result => html! {
            <ResultScreen game={game.clone()} restart={restart.clone()} show_ending={show_ending.clone()} />
        },
        Phase::Ending { .. } => html! { <EndingScreen game={game.clone()} restart={restart.clone()} /> },
    };

    html! {
        <ContextProvider<AudioHandle> context={AudioHandle(audio.clone())}>
            <div id="game-root" class={classes!("game-root", game.speed.css_class())}>
                { content }
            </div>
        </ContextProvider<AudioHandle>>
    }
}
