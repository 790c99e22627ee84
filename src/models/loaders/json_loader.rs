use crate::error::{AppError, AppResult, FileError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// 读取 JSON 文件为任意 JSON 值
///
/// 文件不存在时返回 `FileError::NotFound`，内容不是合法 JSON 时返回解析错误
pub async fn load_json_value(path: &Path) -> AppResult<Value> {
    let display = path.display().to_string();

    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::not_found(display)),
        Err(e) => return Err(AppError::file_read_failed(display, e)),
    };

    serde_json::from_str(&content).map_err(|e| AppError::json_parse_failed(display, e))
}

/// 读取以对象为根的 JSON 文档并转换为指定类型
pub async fn load_json_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let value = load_json_value(path).await?;

    if !value.is_object() {
        return Err(FileError::InvalidRoot {
            path: path.display().to_string(),
        }
        .into());
    }

    serde_json::from_value(value).map_err(|e| AppError::json_parse_failed(path.display().to_string(), e))
}

/// 序列化为带 2 空格缩进的 JSON 文本，非 ASCII 字符原样保留
pub fn to_pretty_json<T: Serialize>(document: &T, path: &Path) -> AppResult<String> {
    serde_json::to_string_pretty(document).map_err(|source| {
        FileError::SerializeFailed {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

/// 写出 JSON 文档，覆盖目标文件
///
/// 先完整序列化再写盘，序列化失败时目标文件保持不变
pub async fn save_json_document<T: Serialize>(path: &Path, document: &T) -> AppResult<()> {
    let content = to_pretty_json(document, path)?;

    fs::write(path, content)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))
}
