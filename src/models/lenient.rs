//! 宽松字段反序列化
//!
//! 题库 JSON 来源杂乱，字段缺失或类型不符时一律降级为 `None` / 空列表 / `false`，
//! 而不是让整个文档解析失败。配合 `#[serde(default, deserialize_with = "...")]` 使用。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 字符串字段，非字符串值视为 `None`
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// 必填文本字段，非字符串值视为空字符串
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

/// 字符串列表，非数组视为空列表，非字符串元素保留为 `None`
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// 对象列表，非数组视为空列表；元素不是对象时以默认值占位，保持位置不变
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
                _ => T::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// 非负整数字段，其他值视为 0
pub fn unsigned<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0))
}

/// 按真值规则读取布尔标记
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// JSON 值的真值判断
///
/// `true`、非零数字、非空字符串/数组/对象为真；`false`、`0`、空值、`null` 为假。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
