//! 日志基础设施

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置的日志级别。配置了日志目录时，额外写入按日期分割的日志文件，
    /// 返回的 guard 需要保持到进程退出，否则文件日志会丢失。
    pub fn init(config: &LoggingConfig) -> std::io::Result<Option<WorkerGuard>> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

        let console = fmt::layer().with_ansi(true);

        let Some(log_dir) = &config.log_dir else {
            tracing_subscriber::registry().with(filter).with(console).init();
            return Ok(None);
        };

        std::fs::create_dir_all(log_dir)?;
        let (writer, guard) = non_blocking(rolling::daily(log_dir, &config.file_prefix));

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(
                // 文件中不使用颜色
                fmt::layer().with_writer(writer).with_ansi(false).with_target(false),
            )
            .init();

        Ok(Some(guard))
    }
}
