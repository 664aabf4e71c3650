//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod modal;
mod sections;
mod settings;

pub use modal::{Modal, ModalState};
pub use sections::{DragState, SectionsState};
pub use settings::{SettingItem, SettingsState};
