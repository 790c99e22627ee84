//! 命令行参数定义
//!
//! 只负责解析参数，执行逻辑在 `app` 模块

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 题库 JSON 格式转换工具
#[derive(Debug, Parser)]
#[command(name = "quizconv")]
#[command(about = "题库 JSON 格式转换工具", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML 配置文件路径
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 输出 debug 级别日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用命令
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 转换指定的题库文件（默认原地覆盖）
    Convert {
        /// 要转换的 JSON 文件
        path: Option<PathBuf>,
        /// 输出到其他文件而不是覆盖原文件
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 原地转换配置中的固定题库文件
    Refresh {
        /// 覆盖配置中的 fixed_file
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// 从规范化题库生成首字母题库
    Initials {
        /// 来源文件（覆盖配置中的 initials_src）
        #[arg(long)]
        src: Option<PathBuf>,
        /// 输出文件（覆盖配置中的 initials_dest）
        #[arg(long)]
        dest: Option<PathBuf>,
    },

    /// 按首字母片段查找答案
    Lookup {
        /// 首字母签名或其片段
        fragment: String,
        /// 索引文件（默认使用 initials_dest）
        #[arg(long)]
        index: Option<PathBuf>,
        /// 列出所有命中结果
        #[arg(long)]
        all: bool,
    },
}

impl Commands {
    /// 命令名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Convert { .. } => "convert",
            Commands::Refresh { .. } => "refresh",
            Commands::Initials { .. } => "initials",
            Commands::Lookup { .. } => "lookup",
        }
    }
}
