//! 日志基础设施

use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// 初始化日志系统
///
/// - 日志级别取自配置，设置了 `RUST_LOG` 时以环境变量为准
/// - 控制台输出带颜色
/// - 开启文件输出时按日期分割写入 `log_dir/file_prefix.YYYY-MM-DD`
///
/// 返回的 guard 需要一直持有到进程退出，丢弃后文件日志不再刷新。
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    let (file_layer, guard) = if config.file_output {
        std::fs::create_dir_all(&config.log_dir)?;

        let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
        let (writer, guard) = non_blocking(file_appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false) // 文件中不使用颜色
            .with_target(false)
            .with_thread_names(true);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
