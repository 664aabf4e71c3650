//! 日志初始化
//!
//! TUI 运行期间独占终端，日志只写入文件：
//! `<配置目录>/resume-builder/logs/resume-builder.log`。
//!
//! 通过 tracing-subscriber 安装全局订阅器，
//! 核心库里的 log:: 记录经 tracing-log 桥接一并写入。
//! 过滤级别可用 RUST_LOG 环境变量覆盖，默认 info。

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config;

/// 日志文件名
const LOG_FILE: &str = "resume-builder.log";

/// 安装全局日志订阅器
///
/// 返回的 `WorkerGuard` 必须持有到进程结束，
/// 否则后台写线程会提前关闭、丢失末尾日志。
pub fn init() -> Result<WorkerGuard> {
    let log_dir = config::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("创建日志目录失败: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    log::info!("logging to {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}
