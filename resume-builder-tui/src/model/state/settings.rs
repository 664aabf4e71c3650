//! 设置页面状态

use crate::i18n::Language;
use crate::view::theme::{self, Theme};

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }

    /// 获取设置项的索引
    pub fn index(&self) -> usize {
        match self {
            SettingItem::Theme => 0,
            SettingItem::Language => 1,
        }
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        match index {
            0 => Some(SettingItem::Theme),
            1 => Some(SettingItem::Language),
            _ => None,
        }
    }
}

/// 设置页面状态
#[derive(Debug)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_index: 0,
            theme: Theme::default(),
            language: Language::default(),
        }
    }
}

impl SettingsState {
    /// 创建新的设置状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取设置项数量
    pub fn item_count(&self) -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => {
                self.theme = self.theme.next();
                // 同步更新全局主题
                theme::set_theme_index(self.theme.index());
            }
            Some(SettingItem::Language) => {
                self.language = self.language.next();
                // 同步更新全局语言设置
                crate::i18n::set_language(self.language);
            }
            None => {}
        }
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => {
                self.theme = self.theme.prev();
                // 同步更新全局主题
                theme::set_theme_index(self.theme.index());
            }
            Some(SettingItem::Language) => {
                self.language = self.language.prev();
                // 同步更新全局语言设置
                crate::i18n::set_language(self.language);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut settings = SettingsState::new();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));

        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::Language));

        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn theme_toggle_is_a_two_way_carousel() {
        let mut settings = SettingsState::new();
        settings.toggle_next();
        assert_eq!(settings.theme, Theme::Light);

        settings.toggle_prev();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn language_toggle_round_trips() {
        let mut settings = SettingsState::new();
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Language));

        settings.toggle_next();
        assert_eq!(settings.language, Language::ZhCn);

        settings.toggle_next();
        assert_eq!(settings.language, Language::EnUs);
    }
}
