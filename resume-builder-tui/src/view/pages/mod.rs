//! 页面视图

pub mod home;
pub mod preview;
pub mod sections;
pub mod settings;
