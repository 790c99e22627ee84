use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 程序配置
///
/// 加载顺序：默认值 → TOML 配置文件 → 环境变量 → 命令行参数
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 数据根目录，相对路径都以此为基准
    pub data_root: PathBuf,
    /// refresh 命令原地转换的题库文件
    pub fixed_file: PathBuf,
    /// 首字母题库的来源文件（已规范化）
    pub initials_src: PathBuf,
    /// 首字母题库的输出文件
    pub initials_dest: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            fixed_file: PathBuf::from("data/kma2.json"),
            initials_src: PathBuf::from("data/cryptotest.json"),
            initials_dest: PathBuf::from("data/cryptotest_initials.json"),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 读取配置文件（可选）并叠加环境变量
    pub async fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let config = match config_file {
            Some(path) => Self::from_toml_file(path).await?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 使用环境变量覆盖配置项
    pub fn with_env<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QUIZ_DATA_DIR") {
            self.data_root = PathBuf::from(v);
        }
        if let Some(v) = lookup("QUIZ_FIXED_FILE") {
            self.fixed_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("QUIZ_INITIALS_SRC") {
            self.initials_src = PathBuf::from(v);
        }
        if let Some(v) = lookup("QUIZ_INITIALS_DEST") {
            self.initials_dest = PathBuf::from(v);
        }
        if let Some(v) = lookup("QUIZ_VERBOSE_LOGGING") {
            self.verbose_logging = v.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "QUIZ_VERBOSE_LOGGING".to_string(),
                value: v.clone(),
                expected_type: "bool".to_string(),
            })?;
        }
        Ok(self)
    }

    /// 将相对路径解析到数据根目录下，绝对路径保持不变
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_root.join(path)
        }
    }
}
