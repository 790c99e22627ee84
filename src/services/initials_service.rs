//! 首字母题库生成服务
//!
//! 把题干压缩成「每个词的第一个字母」组成的签名，用于隐蔽查找答案

use crate::error::{AppError, AppResult};
use crate::models::{load_json_document, save_json_document};
use crate::models::{InitialsDocument, InitialsRecord, QuizDocument};
use std::path::Path;
use tracing::{debug, info};

/// 计算题干的首字母签名
///
/// 按空白切词，每个词取第一个 ASCII 字母并转小写，没有字母的词跳过，结果不带分隔符
pub fn build_initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|part| part.chars().find(char::is_ascii_alphabetic))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 从规范化文档生成首字母文档，只保留签名和正确答案
pub fn derive_initials(document: &QuizDocument) -> InitialsDocument {
    let questions = document
        .questions
        .iter()
        .map(|q| InitialsRecord {
            x_question: build_initials(q.question.as_deref().unwrap_or_default()),
            correct_answer: q.correct_answer.clone(),
        })
        .collect();

    InitialsDocument { questions }
}

/// 读取 `src` 生成首字母文档写入 `dest`，返回写入的条数
///
/// `dest` 不允许与 `src` 指向同一文件
pub async fn write_initials_file(src: &Path, dest: &Path) -> AppResult<usize> {
    if same_file(src, dest) {
        return Err(AppError::usage(format!(
            "输出文件不能覆盖来源文件: {}",
            dest.display()
        )));
    }

    let document: QuizDocument = load_json_document(src).await?;
    let initials = derive_initials(&document);

    for record in &initials.questions {
        debug!("{} → {:?}", record.x_question, record.correct_answer);
    }

    save_json_document(dest, &initials).await?;
    info!(
        "✓ 已从 {} 生成 {} 条首字母记录",
        src.display(),
        initials.questions.len()
    );

    Ok(initials.questions.len())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
