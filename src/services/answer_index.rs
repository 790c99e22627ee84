//! 首字母答案索引
//!
//! 根据首字母签名（或其片段）查找正确答案

use crate::error::AppResult;
use crate::models::load_json_value;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// 索引条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// 去空白、小写化后的签名
    pub key: String,
    pub answer: String,
}

/// 答案索引
#[derive(Debug, Default)]
pub struct AnswerIndex {
    entries: Vec<IndexEntry>,
    /// 签名 → 第一个出现该签名的条目下标
    table: HashMap<String, usize>,
}

impl AnswerIndex {
    /// 从 JSON 文档构建索引
    ///
    /// 支持 `{"questions": [...]}` 或顶层数组。每条记录优先使用 `Xquestion`，
    /// 为空时退回 `question`；签名或答案为空的记录被丢弃。
    pub fn from_document(document: &Value) -> Self {
        let items = document
            .get("questions")
            .and_then(Value::as_array)
            .or_else(|| document.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut index = Self::default();
        for item in items {
            let key = non_empty_str(item, "Xquestion")
                .or_else(|| non_empty_str(item, "question"))
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default();
            let answer = item
                .get("correct_answer")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default();

            if key.is_empty() || answer.is_empty() {
                continue;
            }
            index.push(IndexEntry {
                key,
                answer: answer.to_string(),
            });
        }
        index
    }

    /// 从文件加载索引
    pub async fn load(path: &Path) -> AppResult<Self> {
        let document = load_json_value(path).await?;
        let index = Self::from_document(&document);
        info!("📚 索引已加载: {} 条 ({})", index.len(), path.display());
        Ok(index)
    }

    fn push(&mut self, entry: IndexEntry) {
        let position = self.entries.len();
        self.table.entry(entry.key.clone()).or_insert(position);
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 精确查找，签名相同时取第一条
    pub fn find_exact(&self, initials: &str) -> Option<&str> {
        let key = normalize_query(initials);
        if key.is_empty() {
            return None;
        }
        self.table
            .get(&key)
            .map(|&i| self.entries[i].answer.as_str())
    }

    /// 片段查找：先精确匹配，否则返回第一条签名包含该片段的记录
    pub fn find_partial(&self, fragment: &str) -> Option<&str> {
        if let Some(answer) = self.find_exact(fragment) {
            return Some(answer);
        }
        let key = normalize_query(fragment);
        if key.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|e| e.key.contains(&key))
            .map(|e| e.answer.as_str())
    }

    /// 分阶段搜索，返回全部命中（按文档顺序）
    ///
    /// 1. 签名包含片段
    /// 2. 无结果时，答案文本（不区分大小写）包含片段
    /// 3. 仍无结果且片段至少 2 个字符时，片段是签名的子序列
    pub fn search(&self, fragment: &str) -> Vec<&IndexEntry> {
        let key = normalize_query(fragment);
        if key.is_empty() {
            return Vec::new();
        }

        let hits: Vec<&IndexEntry> = self.entries.iter().filter(|e| e.key.contains(&key)).collect();
        if !hits.is_empty() {
            return hits;
        }

        let hits: Vec<&IndexEntry> = self
            .entries
            .iter()
            .filter(|e| e.answer.to_lowercase().contains(&key))
            .collect();
        if !hits.is_empty() {
            return hits;
        }

        if key.chars().count() < 2 {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| is_subsequence(&key, &e.key))
            .collect()
    }
}

fn non_empty_str<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `needle` 的字符是否按顺序出现在 `haystack` 中
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}
