use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// 规范化后的题库文档
///
/// 字段顺序即输出顺序：`title`、`totalQuestions`、`questions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(
        rename = "totalQuestions",
        default,
        deserialize_with = "lenient::unsigned"
    )]
    pub total_questions: u64,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub questions: Vec<NormalizedQuestion>,
}

/// 规范化后的题目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuestion {
    /// 从 1 开始的连续编号
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub options: Vec<Option<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub correct_answer: Option<String>,
}

impl QuizDocument {
    /// 创建文档，`totalQuestions` 始终等于题目数量
    pub fn new(title: Option<String>, questions: Vec<NormalizedQuestion>) -> Self {
        Self {
            title,
            total_questions: questions.len() as u64,
            questions,
        }
    }
}
