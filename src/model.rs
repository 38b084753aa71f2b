//! Core data model for the geography quiz.
//! The whole game is a single reducer-driven `GameState`; components dispatch
//! `GameAction`s from click handlers and timer callbacks.

use serde::Deserialize;
use std::rc::Rc;
use yew::Reducible;

pub const START_LIVES: u32 = 4;
pub const TIME_LIMIT_SECS: u32 = 10;

pub const RULE_LINES: &[&str] = &[
    "地理の問題が出るニャ。4つの中から正しい答えを選ぶニャ！",
    "1問につき10秒。時間切れは不正解ニャ。",
    "正解するとお水をあげて、植物がぐんぐん育つニャ。",
    "ライフは4つ。間違えると1つ減って、0になるとゲームオーバーニャ。",
];

pub const ENDING_LINES: &[&str] = &[
    "地理の種は育ち、花を咲かせた。",
    "古代の植物は復活した",
    "…ように思えたが、",
    "そうだ、美味しい猫草は",
    "ぜんぶ自分の胃の中ニャ。",
    "さーて、竜一に帰ろっと。",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Climate,
    #[default]
    #[serde(other)]
    Image,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    /// Image URL, or `climate-<zone>` for climate questions.
    pub content: String,
    pub choices: Vec<String>,
    /// Index into `choices`.
    pub correct: usize,
}

impl Question {
    /// Zone code of a climate question (`climate-af` -> `af`).
    pub fn climate_code(&self) -> Option<&str> {
        match self.kind {
            QuestionKind::Climate => self.content.split('-').nth(1),
            QuestionKind::Image => None,
        }
    }
}

/// Playback speed. Every delay and note length is divided by the level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speed {
    #[default]
    X1,
    X2,
    X3,
}

impl Speed {
    pub fn level(self) -> u32 {
        match self {
            Speed::X1 => 1,
            Speed::X2 => 2,
            Speed::X3 => 3,
        }
    }

    pub fn from_level(level: u32) -> Option<Self> {
        match level {
            1 => Some(Speed::X1),
            2 => Some(Speed::X2),
            3 => Some(Speed::X3),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Speed::X1 => Speed::X2,
            Speed::X2 => Speed::X3,
            Speed::X3 => Speed::X1,
        }
    }

    pub fn scale_ms(self, ms: u32) -> u32 {
        ms / self.level()
    }

    pub fn scale_secs(self, secs: f64) -> f64 {
        secs / self.level() as f64
    }

    /// Class applied to the root so CSS animations follow the speed.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Speed::X1 => None,
            Speed::X2 => Some("double-speed"),
            Speed::X3 => Some("triple-speed"),
        }
    }

    pub fn label(self) -> String {
        format!("速度: x{}", self.level())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    Pending,
    Number(u8),
    Go,
}

impl CountdownStep {
    pub fn display(self) -> String {
        match self {
            CountdownStep::Pending => String::new(),
            CountdownStep::Number(n) => n.to_string(),
            CountdownStep::Go => "スタート！".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Original index of the picked choice; `None` when the timer ran out.
    pub picked: Option<usize>,
    pub correct: bool,
}

/// How a choice button is marked once the question is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
    Plain,
    Correct,
    Wrong,
}

impl Outcome {
    pub fn timed_out(&self) -> bool {
        self.picked.is_none()
    }

    /// A time-out leaves every button plain; after a pick the right answer is
    /// always shown, plus the wrong pick if there was one.
    pub fn mark(&self, choice: usize, answer: usize) -> ChoiceMark {
        match self.picked {
            None => ChoiceMark::Plain,
            Some(_) if choice == answer => ChoiceMark::Correct,
            Some(p) if p == choice => ChoiceMark::Wrong,
            Some(_) => ChoiceMark::Plain,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    LoadFailed(String),
    Title,
    Countdown(CountdownStep),
    /// `revealed` bubbles are visible; one past the last shows the button.
    Rules { revealed: usize },
    Transition,
    Question,
    Answered(Outcome),
    Result,
    Ending { revealed: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub questions: Rc<Vec<Question>>,
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub index: usize,
    pub plant_growth: u32,
    pub time_left: u32,
    pub speed: Speed,
    /// Display position -> original choice index for the current question.
    pub choice_order: Vec<usize>,
    /// Outcome of the question answered just before the current transition.
    pub last_outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            questions: Rc::new(Vec::new()),
            phase: Phase::Loading,
            score: 0,
            lives: START_LIVES,
            index: 0,
            plant_growth: 0,
            time_left: TIME_LIMIT_SECS,
            speed: Speed::default(),
            choice_order: Vec::new(),
            last_outcome: None,
        }
    }
}

impl GameState {
    fn fresh(questions: Vec<Question>, speed: Speed) -> Self {
        Self {
            questions: Rc::new(questions),
            phase: Phase::Title,
            speed,
            ..Default::default()
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    /// Every question answered correctly with lives to spare.
    pub fn is_perfect(&self) -> bool {
        !self.questions.is_empty() && self.score as usize == self.questions.len() && self.lives > 0
    }

    pub fn next_label(&self) -> String {
        format!("NEXT {}", crate::util::pad2(self.index + 1))
    }

    pub fn timer_fraction(&self) -> f64 {
        (self.time_left as f64 / TIME_LIMIT_SECS as f64).clamp(0.0, 1.0)
    }

    pub fn result_title(&self) -> &'static str {
        if self.is_game_over() { "ゲームオーバー！" } else { "ゲームクリア！" }
    }

    pub fn result_message(&self) -> &'static str {
        result_message(self.score)
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}

pub fn result_message(score: u32) -> &'static str {
    match score {
        0..=3 => "出直してこいニャ",
        4..=7 => "もっと食べたいニャ",
        8..=11 => "うまうま",
        12..=15 => "そろそろお腹いっぱいニャ",
        16..=19 => "食べきれないニャ",
        20..=23 => "お腹爆発ニャ",
        24..=27 => "余は満足ニャ",
        _ => "あなたの子分にしてくれニャ",
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        if i >= len || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Loaded { questions: Vec<Question> },
    LoadFailed { message: String },
    CycleSpeed,
    SetSpeed(Speed),
    StartCountdown,
    CountdownTick,
    RevealLine,
    ConfirmRules,
    ShowQuestion { order: Vec<usize> },
    TimerTick,
    Answer { choice: usize },
    Advance,
    ShowEnding,
    Restart { questions: Vec<Question> },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded { questions } => {
                if new.phase != Phase::Loading {
                    return self;
                }
                new = GameState::fresh(questions, new.speed);
            }
            LoadFailed { message } => {
                new.phase = Phase::LoadFailed(message);
            }
            CycleSpeed => {
                if new.phase != Phase::Title {
                    return self;
                }
                new.speed = new.speed.next();
            }
            SetSpeed(speed) => {
                new.speed = speed;
            }
            StartCountdown => {
                if new.phase != Phase::Title {
                    return self;
                }
                new.phase = Phase::Countdown(CountdownStep::Pending);
            }
            CountdownTick => {
                let Phase::Countdown(step) = new.phase else {
                    return self;
                };
                new.phase = match step {
                    CountdownStep::Pending => Phase::Countdown(CountdownStep::Number(3)),
                    CountdownStep::Number(n) if n > 1 => Phase::Countdown(CountdownStep::Number(n - 1)),
                    CountdownStep::Number(_) => Phase::Countdown(CountdownStep::Go),
                    CountdownStep::Go => Phase::Rules { revealed: 1 },
                };
            }
            RevealLine => {
                new.phase = match new.phase {
                    Phase::Rules { revealed } if revealed <= RULE_LINES.len() => {
                        Phase::Rules { revealed: revealed + 1 }
                    }
                    Phase::Ending { revealed } if revealed <= ENDING_LINES.len() => {
                        Phase::Ending { revealed: revealed + 1 }
                    }
                    _ => return self,
                };
            }
            ConfirmRules => {
                match new.phase {
                    Phase::Rules { revealed } if revealed > RULE_LINES.len() => {}
                    _ => return self,
                }
                new.last_outcome = None;
                new.phase = Phase::Transition;
            }
            ShowQuestion { order } => {
                if new.phase != Phase::Transition {
                    return self;
                }
                let Some(q) = new.current_question() else {
                    return self;
                };
                let len = q.choices.len();
                new.choice_order = if is_permutation(&order, len) { order } else { (0..len).collect() };
                new.time_left = TIME_LIMIT_SECS;
                new.phase = Phase::Question;
            }
            TimerTick => {
                if new.phase != Phase::Question {
                    return self;
                }
                new.time_left = new.time_left.saturating_sub(1);
                if new.time_left == 0 {
                    new.lose_life();
                    new.phase = Phase::Answered(Outcome { picked: None, correct: false });
                }
            }
            Answer { choice } => {
                if new.phase != Phase::Question {
                    return self;
                }
                let Some(q) = new.current_question() else {
                    return self;
                };
                let correct = choice == q.correct;
                if correct {
                    new.score += 1;
                    new.plant_growth += 1;
                } else {
                    new.lose_life();
                }
                new.phase = Phase::Answered(Outcome { picked: Some(choice), correct });
            }
            Advance => {
                let Phase::Answered(outcome) = new.phase else {
                    return self;
                };
                new.index += 1;
                new.last_outcome = Some(outcome);
                new.phase = if new.index >= new.questions.len() || new.lives == 0 {
                    Phase::Result
                } else {
                    Phase::Transition
                };
            }
            ShowEnding => {
                match new.phase {
                    Phase::Result if new.is_perfect() => {}
                    Phase::Title => {}
                    _ => return self,
                }
                new.phase = Phase::Ending { revealed: 1 };
            }
            Restart { questions } => {
                match new.phase {
                    Phase::Result | Phase::Ending { .. } => {}
                    _ => return self,
                }
                new = GameState::fresh(questions, new.speed);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question {
            title: "この国はどこ？".into(),
            kind: QuestionKind::Image,
            content: "images/q.png".into(),
            choices: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct,
        }
    }

    fn apply(state: Rc<GameState>, actions: Vec<GameAction>) -> Rc<GameState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn loaded(n: usize) -> Rc<GameState> {
        let qs = (0..n).map(|i| question(i % 4)).collect();
        Rc::new(GameState::default()).reduce(GameAction::Loaded { questions: qs })
    }

    fn at_first_question(n: usize) -> Rc<GameState> {
        let mut s = loaded(n).reduce(GameAction::StartCountdown);
        for _ in 0..5 {
            s = s.reduce(GameAction::CountdownTick);
        }
        for _ in 0..RULE_LINES.len() {
            s = s.reduce(GameAction::RevealLine);
        }
        apply(s, vec![GameAction::ConfirmRules, GameAction::ShowQuestion { order: vec![3, 2, 1, 0] }])
    }

    #[test]
    fn loaded_goes_to_title_with_defaults() {
        let s = loaded(3);
        assert_eq!(s.phase, Phase::Title);
        assert_eq!(s.lives, START_LIVES);
        assert_eq!(s.question_count(), 3);
    }

    #[test]
    fn countdown_runs_three_two_one_go_then_rules() {
        let mut s = loaded(1).reduce(GameAction::StartCountdown);
        let mut seen = Vec::new();
        for _ in 0..5 {
            s = s.reduce(GameAction::CountdownTick);
            seen.push(s.phase.clone());
        }
        assert_eq!(
            seen,
            vec![
                Phase::Countdown(CountdownStep::Number(3)),
                Phase::Countdown(CountdownStep::Number(2)),
                Phase::Countdown(CountdownStep::Number(1)),
                Phase::Countdown(CountdownStep::Go),
                Phase::Rules { revealed: 1 },
            ]
        );
    }

    #[test]
    fn rules_cannot_be_confirmed_before_button_shows() {
        let mut s = loaded(1).reduce(GameAction::StartCountdown);
        for _ in 0..5 {
            s = s.reduce(GameAction::CountdownTick);
        }
        let early = s.clone().reduce(GameAction::ConfirmRules);
        assert!(matches!(early.phase, Phase::Rules { .. }));
        for _ in 0..10 {
            s = s.reduce(GameAction::RevealLine);
        }
        assert_eq!(s.phase, Phase::Rules { revealed: RULE_LINES.len() + 1 });
        assert_eq!(s.reduce(GameAction::ConfirmRules).phase, Phase::Transition);
    }

    #[test]
    fn show_question_uses_given_order_or_identity() {
        let s = at_first_question(2);
        assert_eq!(s.phase, Phase::Question);
        assert_eq!(s.choice_order, vec![3, 2, 1, 0]);
        assert_eq!(s.time_left, TIME_LIMIT_SECS);

        let mut t = loaded(1).reduce(GameAction::StartCountdown);
        for _ in 0..5 {
            t = t.reduce(GameAction::CountdownTick);
        }
        for _ in 0..RULE_LINES.len() {
            t = t.reduce(GameAction::RevealLine);
        }
        let t = apply(t, vec![GameAction::ConfirmRules, GameAction::ShowQuestion { order: vec![0, 0, 1, 2] }]);
        assert_eq!(t.choice_order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn correct_answer_scores_and_grows_plant() {
        let s = at_first_question(2).reduce(GameAction::Answer { choice: 0 });
        assert_eq!(s.score, 1);
        assert_eq!(s.plant_growth, 1);
        assert_eq!(s.lives, START_LIVES);
        assert_eq!(s.phase, Phase::Answered(Outcome { picked: Some(0), correct: true }));
    }

    #[test]
    fn wrong_answer_costs_a_life_and_answers_once() {
        let s = at_first_question(2).reduce(GameAction::Answer { choice: 2 });
        assert_eq!(s.lives, START_LIVES - 1);
        assert_eq!(s.score, 0);
        let again = s.clone().reduce(GameAction::Answer { choice: 0 });
        assert_eq!(again.score, 0);
        assert!(Rc::ptr_eq(&s, &again));
    }

    #[test]
    fn timer_runs_out_into_timed_out_outcome() {
        let mut s = at_first_question(2);
        for _ in 0..TIME_LIMIT_SECS - 1 {
            s = s.reduce(GameAction::TimerTick);
        }
        assert_eq!(s.phase, Phase::Question);
        assert_eq!(s.time_left, 1);
        s = s.reduce(GameAction::TimerTick);
        assert_eq!(s.time_left, 0);
        assert_eq!(s.lives, START_LIVES - 1);
        let Phase::Answered(outcome) = s.phase else {
            panic!("expected answered");
        };
        assert!(outcome.timed_out());
        // further ticks are ignored
        let after = s.clone().reduce(GameAction::TimerTick);
        assert_eq!(after.lives, START_LIVES - 1);
    }

    #[test]
    fn advance_moves_to_transition_then_result_at_end() {
        let s = apply(at_first_question(2), vec![GameAction::Answer { choice: 0 }, GameAction::Advance]);
        assert_eq!(s.phase, Phase::Transition);
        assert_eq!(s.index, 1);
        assert_eq!(s.next_label(), "NEXT 02");
        assert_eq!(s.last_outcome, Some(Outcome { picked: Some(0), correct: true }));

        let s = apply(
            s,
            vec![
                GameAction::ShowQuestion { order: vec![0, 1, 2, 3] },
                GameAction::Answer { choice: 1 },
                GameAction::Advance,
            ],
        );
        assert_eq!(s.phase, Phase::Result);
        assert!(s.is_perfect());
        assert_eq!(s.plant_growth, 2);
        assert_eq!(s.result_title(), "ゲームクリア！");
    }

    #[test]
    fn losing_every_life_ends_the_game_early() {
        let mut s = at_first_question(10);
        for _ in 0..START_LIVES {
            s = apply(s, vec![GameAction::Answer { choice: 9 }, GameAction::Advance]);
            if s.phase == Phase::Transition {
                s = s.reduce(GameAction::ShowQuestion { order: vec![0, 1, 2, 3] });
            }
        }
        assert_eq!(s.lives, 0);
        assert_eq!(s.phase, Phase::Result);
        assert_eq!(s.index, START_LIVES as usize);
        assert!(s.is_game_over());
        assert_eq!(s.result_title(), "ゲームオーバー！");
    }

    #[test]
    fn ending_only_reachable_when_perfect_or_from_title() {
        let s = apply(at_first_question(1), vec![GameAction::Answer { choice: 2 }, GameAction::Advance]);
        assert_eq!(s.phase, Phase::Result);
        assert!(!s.is_perfect());
        assert_eq!(s.clone().reduce(GameAction::ShowEnding).phase, Phase::Result);

        let t = loaded(1).reduce(GameAction::ShowEnding);
        assert_eq!(t.phase, Phase::Ending { revealed: 1 });
        let mut t = t;
        for _ in 0..20 {
            t = t.reduce(GameAction::RevealLine);
        }
        assert_eq!(t.phase, Phase::Ending { revealed: ENDING_LINES.len() + 1 });
    }

    #[test]
    fn perfect_result_opens_the_ending() {
        let s = apply(at_first_question(1), vec![GameAction::Answer { choice: 0 }, GameAction::Advance]);
        assert_eq!(s.phase, Phase::Result);
        assert!(s.is_perfect());
        let e = s.reduce(GameAction::ShowEnding);
        assert_eq!(e.phase, Phase::Ending { revealed: 1 });
        assert_eq!(e.score, 1);
    }

    #[test]
    fn restart_from_ending_returns_to_title() {
        let mut e = loaded(2).reduce(GameAction::SetSpeed(Speed::X3)).reduce(GameAction::ShowEnding);
        for _ in 0..ENDING_LINES.len() {
            e = e.reduce(GameAction::RevealLine);
        }
        assert!(matches!(e.phase, Phase::Ending { .. }));
        let r = e.reduce(GameAction::Restart { questions: vec![question(2), question(0)] });
        assert_eq!(r.phase, Phase::Title);
        assert_eq!(r.speed, Speed::X3);
        assert_eq!(r.question_count(), 2);
        assert_eq!(r.current_question().map(|q| q.correct), Some(2));
    }

    #[test]
    fn restart_is_ignored_mid_game() {
        let q = at_first_question(2);
        let same = q.clone().reduce(GameAction::Restart { questions: vec![question(1)] });
        assert!(Rc::ptr_eq(&q, &same));

        let t = apply(q, vec![GameAction::Answer { choice: 0 }, GameAction::Advance]);
        assert_eq!(t.phase, Phase::Transition);
        let same = t.clone().reduce(GameAction::Restart { questions: vec![question(1)] });
        assert!(Rc::ptr_eq(&t, &same));
        assert_eq!(same.score, 1);
    }

    #[test]
    fn speed_cycles_on_title_and_survives_restart() {
        let s = apply(loaded(1), vec![GameAction::CycleSpeed, GameAction::CycleSpeed]);
        assert_eq!(s.speed, Speed::X3);
        assert_eq!(s.clone().reduce(GameAction::CycleSpeed).speed, Speed::X1);

        let s = apply(s, vec![GameAction::StartCountdown, GameAction::CycleSpeed]);
        assert_eq!(s.speed, Speed::X3);
        let s = s.reduce(GameAction::LoadFailed { message: "x".into() });
        assert!(matches!(s.phase, Phase::LoadFailed(_)));

        let mut r = at_first_question(1).reduce(GameAction::SetSpeed(Speed::X2));
        r = apply(r, vec![GameAction::Answer { choice: 0 }, GameAction::Advance]);
        let r = r.reduce(GameAction::Restart { questions: vec![question(1)] });
        assert_eq!(r.phase, Phase::Title);
        assert_eq!(r.speed, Speed::X2);
        assert_eq!(r.score, 0);
        assert_eq!(r.plant_growth, 0);
        assert_eq!(r.lives, START_LIVES);
    }

    #[test]
    fn speed_scales_delays() {
        assert_eq!(Speed::X1.scale_ms(1500), 1500);
        assert_eq!(Speed::X2.scale_ms(1500), 750);
        assert_eq!(Speed::X3.scale_ms(1000), 333);
        assert!((Speed::X2.scale_secs(0.4) - 0.2).abs() < 1e-9);
        assert_eq!(Speed::from_level(3), Some(Speed::X3));
        assert_eq!(Speed::from_level(4), None);
        assert_eq!(Speed::X2.label(), "速度: x2");
    }

    #[test]
    fn result_message_bands() {
        assert_eq!(result_message(0), "出直してこいニャ");
        assert_eq!(result_message(3), "出直してこいニャ");
        assert_eq!(result_message(4), "もっと食べたいニャ");
        assert_eq!(result_message(11), "うまうま");
        assert_eq!(result_message(27), "余は満足ニャ");
        assert_eq!(result_message(28), "あなたの子分にしてくれニャ");
    }

    #[test]
    fn climate_code_and_kind_parsing() {
        let q: Question = serde_json::from_str(
            r#"{"title":"t","type":"climate","content":"climate-bwh","choices":["a"],"correct":0}"#,
        )
        .unwrap();
        assert_eq!(q.kind, QuestionKind::Climate);
        assert_eq!(q.climate_code(), Some("bwh"));

        let img: Question = serde_json::from_str(
            r#"{"title":"t","type":"flag","content":"img/fr.png","choices":["a"],"correct":0}"#,
        )
        .unwrap();
        assert_eq!(img.kind, QuestionKind::Image);
        assert_eq!(img.climate_code(), None);

        let untyped: Question =
            serde_json::from_str(r#"{"title":"t","content":"x.png","choices":["a"],"correct":0}"#).unwrap();
        assert_eq!(untyped.kind, QuestionKind::Image);
    }

    #[test]
    fn choice_marks_after_judgement() {
        let right = Outcome { picked: Some(1), correct: true };
        assert_eq!(right.mark(1, 1), ChoiceMark::Correct);
        assert_eq!(right.mark(0, 1), ChoiceMark::Plain);

        let wrong = Outcome { picked: Some(3), correct: false };
        assert_eq!(wrong.mark(3, 1), ChoiceMark::Wrong);
        assert_eq!(wrong.mark(1, 1), ChoiceMark::Correct);
        assert_eq!(wrong.mark(2, 1), ChoiceMark::Plain);

        let late = Outcome { picked: None, correct: false };
        assert!((0..4).all(|c| late.mark(c, 1) == ChoiceMark::Plain));
    }

    #[test]
    fn timer_fraction_tracks_time_left() {
        let mut s = (*at_first_question(1)).clone();
        assert_eq!(s.timer_fraction(), 1.0);
        s.time_left = 5;
        assert!((s.timer_fraction() - 0.5).abs() < 1e-9);
    }
}
