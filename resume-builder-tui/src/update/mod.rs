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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（章节手势都在这里）
//!         mod modal;              // 弹窗子消息处理
//!
//!         use crate::message::AppMessage;
//!         use crate::model::{App , FocusPanel};
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => {
//!                         app.should_quit = true;
//!                     }
//!                     AppMessage::Navigation(nav_msg) => {
//!                         navigation::update(app, nav_msg);
//!                     }
//!                     AppMessage::Content(content_msg) => {
//!                         content::update(app, content_msg);
//!                     }
//!                     AppMessage::Modal(modal_msg) => {
//!                         modal::update(app, modal_msg);
//!                     }
//!                     ...
//!                 }
//!             }
//!
//!         —— 的主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理（navigation、content、modal）。
//!             通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 内容更新（content.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     章节页的全部手势在这里落地：
//!         - SelectPrevious / SelectNext   列表移动；拖拽中改为移动悬停位置
//!         - Grab / Drop / AbortDrag       拎起、放下、放弃拖拽
//!         - BeginEdit / EditInput / ...   重命名，逐字生效
//!         - ToggleEnabled                 启用/停用章节
//!         - ShowDescription               查描述，成功开弹窗，失败进状态栏
//!         - Save / Cancel                 提交或放弃整个排布（只在有修改时有效）
//!
//!     对大纲的每一次修改都通过 resume-builder-core 的 SectionOutline 进行，
//!     Update 层不自己动章节列表。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!




mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, FocusPanel};




/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 弹窗打开时先关弹窗，否则把焦点交回导航栏
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_status_empties_the_status_bar() {
        let mut app = App::default();
        app.set_status("saved");

        update(&mut app, AppMessage::ClearStatus);

        assert!(app.status_message.is_none());
        assert!(!app.status_expired());
    }
}
