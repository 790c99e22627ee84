//! 原始题库格式：每道题带答案列表，每个答案带正确标记
//!
//! ```json
//! { "title": "...", "questions": [ { "question": "...", "answers": [ { "text": "...", "correct": true } ] } ] }
//! ```

use crate::models::lenient;
use serde::Deserialize;

/// 原始题库文档
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub questions: Vec<SourceQuestion>,
}

/// 原始题目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceQuestion {
    #[serde(default, deserialize_with = "lenient::string")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub answers: Vec<SourceAnswer>,
}

/// 原始答案
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceAnswer {
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub correct: bool,
}

impl SourceQuestion {
    /// 被标记为正确的答案数量
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }
}
