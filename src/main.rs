use clap::error::ErrorKind;
use clap::Parser;
use quiz_convert::cli::Cli;
use quiz_convert::config::Config;
use quiz_convert::utils::logging;
use quiz_convert::App;
use std::process::ExitCode;
use tracing::error;

/// 参数错误的退出码，与「文件不存在」(2) 区分开
const USAGE_EXIT_CODE: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    // 加载配置
    let config = Config::load(cli.config.as_deref()).await;

    // 初始化日志
    let verbose = cli.verbose || config.as_ref().map(|c| c.verbose_logging).unwrap_or(false);
    logging::init(verbose);

    // 运行命令
    let result = match config {
        Ok(config) => App::new(config).run(cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            eprintln!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
