//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 同步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌───────────────────┐     │
//！│      │  终端   │                                │ resume-builder-   │     │
//！│      │ (Util)  │                                │      core         │     │
//！│      └─────────┘                                └───────────────────┘     │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层是纯函数：读取 Model，画出界面，不修改任何状态。
//! 每一轮主循环都整屏重绘，不做局部刷新。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 导航/内容分栏 + 状态栏）
//!         pub mod theme;          // 主题与样式
//!
//!         mod components;         // 可复用组件（导航栏、状态栏、弹窗）
//!         mod pages;              // 各页面的具体渲染
//!
//!         pub fn render(app: &App , frame: &mut Frame)
//!
//!
//!     渲染顺序（layout.rs 中）：
//!         1. 标题栏
//!         2. 左侧导航（components/navigation.rs）
//!         3. 右侧内容（pages/ 下按 current_page 分发）
//!         4. 底部状态栏（components/statusbar.rs）
//!         5. 弹窗盖在最上层（components/modal.rs）
//!
//!
//! View 层只依赖 Model 层的数据和 i18n / theme 两个全局量。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
