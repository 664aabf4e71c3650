//! 应用主状态结构

use std::time::{Duration, Instant};

use crate::config::AppConfig;

use super::{FocusPanel, ModalState, NavigationState, Page, SectionsState, SettingsState};

/// 状态栏消息的显示时长，到点后主循环会清掉它
const STATUS_TTL: Duration = Duration::from_secs(5);

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 状态栏消息的过期时刻
    pub status_deadline: Option<Instant>,

    // === 各页面状态 ===
    /// 章节页面状态
    pub sections: SectionsState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 主题和语言从配置文件里读出来的值开始
    pub fn new(config: &AppConfig) -> Self {
        let mut settings = SettingsState::new();
        settings.theme = config.theme();
        settings.language = config.language();

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            status_deadline: None,
            sections: SectionsState::new(),
            settings,
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息，同时重置它的过期时刻
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_deadline = Some(Instant::now() + STATUS_TTL);
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_deadline = None;
    }

    /// 状态消息是否已到期（没有消息时恒为 false）
    pub fn status_expired(&self) -> bool {
        self.status_deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_status_arms_the_expiry_deadline() {
        let mut app = App::default();
        assert!(app.status_deadline.is_none());
        assert!(!app.status_expired());

        app.set_status("saved");
        assert_eq!(app.status_message.as_deref(), Some("saved"));
        assert!(app.status_deadline.is_some());
        assert!(!app.status_expired());
    }

    #[test]
    fn status_expires_once_its_deadline_passes() {
        let mut app = App::default();
        app.set_status("saved");

        app.status_deadline = Some(Instant::now());
        assert!(app.status_expired());
    }

    #[test]
    fn clear_status_disarms_the_deadline() {
        let mut app = App::default();
        app.set_status("saved");
        app.clear_status();

        assert!(app.status_message.is_none());
        assert!(app.status_deadline.is_none());
        assert!(!app.status_expired());
    }
}
