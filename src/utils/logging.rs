/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info 级别。日志写到 stderr，
/// stdout 只留给命令结果。
pub fn init(verbose: bool) {
    let default_level = if verbose {
        "quiz_convert=debug"
    } else {
        "quiz_convert=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录命令启动信息
///
/// # 参数
/// - `command`: 命令名称
pub fn log_startup(command: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} - {}", command, chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("{}", "=".repeat(60));
}

/// 记录命令完成信息
///
/// # 参数
/// - `count`: 处理的题目数量
/// - `output`: 输出文件路径
pub fn log_finish(count: usize, output: &str) {
    info!("{}", "─".repeat(60));
    info!("✅ 完成: {} 道题 → {}", count, output);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
