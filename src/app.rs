use crate::cli::Commands;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::{convert_file, write_initials_file, AnswerIndex};
use crate::utils::logging::{log_finish, log_startup};
use std::path::PathBuf;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 执行命令
    pub async fn run(&self, command: Commands) -> AppResult<()> {
        log_startup(command.name());

        match command {
            Commands::Convert { path, output } => self.convert(path, output).await,
            Commands::Refresh { path } => self.refresh(path).await,
            Commands::Initials { src, dest } => self.initials(src, dest).await,
            Commands::Lookup {
                fragment,
                index,
                all,
            } => self.lookup(&fragment, index, all).await,
        }
    }

    /// 转换命令行指定的文件
    async fn convert(&self, path: Option<PathBuf>, output: Option<PathBuf>) -> AppResult<()> {
        let path = path.ok_or_else(|| AppError::usage("quizconv convert <PATH> [--output <DEST>]"))?;
        if !path.exists() {
            return Err(AppError::not_found(path.display().to_string()));
        }
        let dest = output.unwrap_or_else(|| path.clone());

        let summary = convert_file(&path, &dest).await?;
        log_finish(summary.questions, &dest.display().to_string());
        println!("已转换 {} -> {} 道题", dest.display(), summary.questions);
        Ok(())
    }

    /// 原地转换配置中的固定文件
    async fn refresh(&self, path: Option<PathBuf>) -> AppResult<()> {
        let path = path.unwrap_or_else(|| self.config.resolve(&self.config.fixed_file));
        info!("📁 固定题库文件: {}", path.display());

        let summary = convert_file(&path, &path).await?;
        log_finish(summary.questions, &path.display().to_string());
        println!("已转换 {} 道题并更新 {}", summary.questions, path.display());
        Ok(())
    }

    /// 生成首字母题库
    async fn initials(&self, src: Option<PathBuf>, dest: Option<PathBuf>) -> AppResult<()> {
        let src = src.unwrap_or_else(|| self.config.resolve(&self.config.initials_src));
        let dest = dest.unwrap_or_else(|| self.config.resolve(&self.config.initials_dest));

        let count = write_initials_file(&src, &dest).await?;
        log_finish(count, &dest.display().to_string());
        println!("已写入 {} 条到 {}", count, dest.display());
        Ok(())
    }

    /// 查找答案
    async fn lookup(&self, fragment: &str, index: Option<PathBuf>, all: bool) -> AppResult<()> {
        let path = index.unwrap_or_else(|| self.config.resolve(&self.config.initials_dest));
        let index = AnswerIndex::load(&path).await?;

        if all {
            let hits = index.search(fragment);
            if hits.is_empty() {
                warn!("未找到匹配: {}", fragment);
                println!("未找到匹配");
            }
            for (i, entry) in hits.iter().enumerate() {
                println!("[{}/{}] {} → {}", i + 1, hits.len(), entry.key, entry.answer);
            }
            return Ok(());
        }

        match index.find_partial(fragment) {
            Some(answer) => println!("{}", answer),
            None => {
                warn!("未找到匹配: {}", fragment);
                println!("未找到匹配");
            }
        }
        Ok(())
    }
}
