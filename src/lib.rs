//! # Quiz Convert
//!
//! 题库 JSON 格式转换工具
//!
//! ## 模块结构
//!
//! - `models/` - 原始题库、规范化题库、首字母题库的数据结构，以及 JSON 读写
//! - `services/` - 规范化、首字母签名生成、答案索引
//! - `app` / `cli` - 命令行入口与命令分发
//! - `config` - 默认值 → TOML → 环境变量 的配置加载
//!
//! ## 数据流
//!
//! ```text
//! 原始题库 {question, answers[{text, correct}]}
//!     ↓ convert / refresh
//! 规范化题库 {id, question, options, correct_answer}
//!     ↓ initials
//! 首字母题库 {Xquestion, correct_answer}
//!     ↓ lookup
//! 答案
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{InitialsDocument, NormalizedQuestion, QuizDocument, SourceDocument};
pub use services::{build_initials, normalize_document, AnswerIndex};
