//! 题库规范化服务
//!
//! 把「答案列表 + 正确标记」格式转换为「选项列表 + 唯一正确答案」格式

use crate::error::AppResult;
use crate::models::{load_json_document, save_json_document};
use crate::models::{NormalizedQuestion, QuizDocument, SourceDocument, SourceQuestion};
use crate::utils::logging::truncate_text;
use std::path::Path;
use tracing::{debug, info, warn};

/// 转换统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// 转换的题目数量
    pub questions: usize,
    /// 标记了多个正确答案的题目数量（取第一个）
    pub multiple_correct: usize,
    /// 没有正确答案的题目数量
    pub missing_correct: usize,
}

/// 规范化单道题
///
/// 选项按原答案顺序排列；正确答案取第一个被标记为正确的答案文本，没有则为 `None`
pub fn normalize_question(id: u64, source: &SourceQuestion) -> NormalizedQuestion {
    let options = source.answers.iter().map(|a| a.text.clone()).collect();
    let correct_answer = source
        .answers
        .iter()
        .find(|a| a.correct)
        .and_then(|a| a.text.clone());

    NormalizedQuestion {
        id,
        question: source.question.clone(),
        options,
        correct_answer,
    }
}

/// 规范化整个文档，编号从 1 开始连续分配
pub fn normalize_document(source: &SourceDocument) -> QuizDocument {
    let questions = source
        .questions
        .iter()
        .zip(1u64..)
        .map(|(q, id)| normalize_question(id, q))
        .collect();

    QuizDocument::new(source.title.clone(), questions)
}

/// 统计数据质量问题
pub fn summarize(source: &SourceDocument) -> ConvertSummary {
    let mut summary = ConvertSummary {
        questions: source.questions.len(),
        ..Default::default()
    };

    for q in &source.questions {
        match q.correct_count() {
            0 => summary.missing_correct += 1,
            1 => {}
            _ => summary.multiple_correct += 1,
        }
    }

    summary
}

/// 读取 `src`，规范化后写入 `dest`（两者可以相同，即原地转换）
pub async fn convert_file(src: &Path, dest: &Path) -> AppResult<ConvertSummary> {
    let source: SourceDocument = load_json_document(src).await?;
    info!("📄 读取 {}: {} 道题", src.display(), source.questions.len());

    let document = normalize_document(&source);
    for q in &document.questions {
        debug!(
            "[{}] {} | 选项 {} 个",
            q.id,
            truncate_text(q.question.as_deref().unwrap_or_default(), 40),
            q.options.len()
        );
    }

    let summary = summarize(&source);
    if summary.multiple_correct > 0 {
        warn!(
            "⚠️ {} 道题标记了多个正确答案，已取第一个",
            summary.multiple_correct
        );
    }
    if summary.missing_correct > 0 {
        warn!("⚠️ {} 道题没有正确答案", summary.missing_correct);
    }

    save_json_document(dest, &document).await?;
    info!("✓ 已写入 {}", dest.display());

    Ok(summary)
}
