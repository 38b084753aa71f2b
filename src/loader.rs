//! Fetches and validates `questions.json`.

use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::chart::ClimateZone;
use crate::model::{Question, QuestionKind};

pub const QUESTIONS_URL: &str = "questions.json";

#[derive(Debug)]
pub enum LoadError {
    NoWindow,
    Network(String),
    Status(u16),
    Parse(serde_json::Error),
    Empty,
    InvalidQuestion { index: usize, reason: &'static str },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoWindow => write!(f, "no global window"),
            LoadError::Network(msg) => write!(f, "network error: {}", msg),
            LoadError::Status(code) => write!(f, "HTTP error! status: {}", code),
            LoadError::Parse(e) => write!(f, "invalid question file: {}", e),
            LoadError::Empty => write!(f, "question file has no questions"),
            LoadError::InvalidQuestion { index, reason } => {
                write!(f, "question {} is invalid: {}", index + 1, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

fn js_message(v: JsValue) -> LoadError {
    LoadError::Network(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
}

pub fn validate(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    for (index, q) in questions.iter().enumerate() {
        if q.choices.is_empty() {
            return Err(LoadError::InvalidQuestion { index, reason: "no choices" });
        }
        if q.correct >= q.choices.len() {
            return Err(LoadError::InvalidQuestion { index, reason: "correct index out of range" });
        }
        if q.kind == QuestionKind::Climate && q.climate_code().and_then(ClimateZone::from_code).is_none() {
            return Err(LoadError::InvalidQuestion { index, reason: "unknown climate zone" });
        }
    }
    Ok(())
}

pub fn parse_questions(raw: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    validate(&questions)?;
    Ok(questions)
}

pub async fn fetch_questions(url: &str) -> Result<Vec<Question>, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let resp: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_message)?
        .dyn_into()
        .map_err(js_message)?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(js_message)?)
        .await
        .map_err(js_message)?;
    let raw = text.as_string().unwrap_or_default();
    parse_questions(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"title": "この国旗はどこの国？", "type": "flag", "content": "images/jp.png",
         "choices": ["日本", "中国", "韓国", "タイ"], "correct": 0},
        {"title": "この雨温図の気候は？", "type": "climate", "content": "climate-csa",
         "choices": ["熱帯雨林", "サバナ", "砂漠", "地中海性"], "correct": 3}
    ]"#;

    #[test]
    fn parses_sample_file() {
        let qs = parse_questions(SAMPLE).unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[1].kind, QuestionKind::Climate);
        assert_eq!(qs[1].climate_code(), Some("csa"));
    }

    #[test]
    fn bundled_question_file_resolves_every_chart() {
        let qs = parse_questions(include_str!("../questions.json")).unwrap();
        let climate: Vec<_> = qs.iter().filter(|q| q.kind == QuestionKind::Climate).collect();
        assert!(!climate.is_empty());
        for q in climate {
            assert!(q.climate_code().and_then(ClimateZone::from_code).is_some(), "{}", q.content);
        }
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        for q in qs.iter().filter(|q| q.kind == QuestionKind::Image) {
            assert!(root.join(&q.content).is_file(), "missing {}", q.content);
        }
    }

    #[test]
    fn unknown_climate_zone_is_rejected() {
        for content in ["Af", "climate-xx"] {
            let raw = format!(
                r#"[{{"title":"t","type":"climate","content":"{}","choices":["a"],"correct":0}}]"#,
                content
            );
            match parse_questions(&raw) {
                Err(LoadError::InvalidQuestion { reason, .. }) => assert_eq!(reason, "unknown climate zone"),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(parse_questions("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn out_of_range_answer_is_rejected() {
        let raw = r#"[{"title":"t","content":"c","choices":["a","b"],"correct":2}]"#;
        match parse_questions(raw) {
            Err(LoadError::InvalidQuestion { index, .. }) => assert_eq!(index, 0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn question_without_choices_is_rejected() {
        let raw = r#"[{"title":"t","content":"c","choices":[],"correct":0}]"#;
        assert!(matches!(parse_questions(raw), Err(LoadError::InvalidQuestion { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_questions("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("invalid question file"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn status_error_message() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(
            LoadError::InvalidQuestion { index: 2, reason: "no choices" }.to_string(),
            "question 3 is invalid: no choices"
        );
    }
}
