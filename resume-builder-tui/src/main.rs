//! Resume Builder TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 章节大纲本身的业务逻辑在 resume-builder-core 中，
//! Update 层对它进行同步调用。
//!
//!
//! main.rs
//! Resume Builder TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     logging::init()         // 初始化日志（写入文件，TUI 独占终端）
//!     config::load()          // 读取配置（主题 / 语言），缺失时用默认值
//!     init_terminal()         // 初始化终端，以为 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     config::save()          // 退出时写回配置
//!
//! }
//!
//!
//! 当启动程序时，main.rs：
//!     `logging::init()`        // from logging.rs
//!
//!     有：
//!         · tracing_appender::rolling::never(...)
//!             - 打开日志文件（配置目录下的 logs/）
//!         · tracing_subscriber::registry() ... .init()
//!             - 安装全局订阅器，RUST_LOG 可调过滤级别
//!         · 返回 WorkerGuard，持有到进程结束，保证日志落盘
//!
//!
//!     `init_terminal()`        // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · 返回 Terminal 对象
//!
//!
//!     App::new(&config)       // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod config;
mod event;
pub mod i18n;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（在进入备用屏幕之前）
    let _guard = logging::init()?;

    // 2. 读取配置并应用主题 / 语言
    let config = config::load();
    config.apply();

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 写回配置（失败只记日志，不影响退出）
    if let Err(err) = config::save(&config::AppConfig::from_settings(&app.settings)) {
        log::warn!("failed to save config: {err}");
    }

    // 8. 返回结果
    result
}
