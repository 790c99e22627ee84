use crate::models::lenient;
use serde::{Deserialize, Serialize};

/// 首字母题库文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialsDocument {
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub questions: Vec<InitialsRecord>,
}

/// 首字母记录：题干签名 + 正确答案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialsRecord {
    #[serde(rename = "Xquestion", default, deserialize_with = "lenient::text")]
    pub x_question: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub correct_answer: Option<String>,
}
