//! 应用配置
//!
//! 使用 JSON 文件存储界面偏好（主题、语言）
//! 文件缺失或损坏时回退默认值，不阻塞启动

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::{self, Language};
use crate::model::state::SettingsState;
use crate::view::theme::{self, Theme};

/// 获取配置目录路径
fn config_root() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resume-builder")
}

/// 获取配置文件路径
fn config_file() -> PathBuf {
    config_root().join("config.json")
}

/// 获取日志目录路径
pub fn log_dir() -> PathBuf {
    config_root().join("logs")
}

/// 应用配置
///
/// 只保存跨会话保留的界面偏好，简历结构本身不落盘
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 主题代码（dark / light）
    pub theme: String,
    /// 语言代码（BCP 47 标准）
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark.code().to_string(),
            language: Language::EnUs.code().to_string(),
        }
    }
}

impl AppConfig {
    /// 解析主题代码，未知值回退深色
    pub fn theme(&self) -> Theme {
        Theme::from_code(&self.theme).unwrap_or_default()
    }

    /// 解析语言代码，未知值回退英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    /// 把配置应用到全局主题与语言
    pub fn apply(&self) {
        theme::set_theme_index(self.theme().index());
        i18n::set_language(self.language());
    }

    /// 从设置页状态生成待保存的配置
    pub fn from_settings(settings: &SettingsState) -> Self {
        Self {
            theme: settings.theme.code().to_string(),
            language: settings.language.code().to_string(),
        }
    }
}

/// 从配置文件加载配置
pub fn load() -> AppConfig {
    let path = config_file();

    if !path.exists() {
        return AppConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("配置文件解析失败，使用默认配置: {err}");
                AppConfig::default()
            }
        },
        Err(err) => {
            log::warn!("配置文件读取失败，使用默认配置: {err}");
            AppConfig::default()
        }
    }
}

/// 保存配置到文件
pub fn save(config: &AppConfig) -> anyhow::Result<()> {
    std::fs::create_dir_all(config_root())?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(config_file(), content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_parsers() {
        let config = AppConfig::default();
        assert_eq!(config.theme().code(), config.theme);
        assert_eq!(config.language().code(), config.language);
    }

    #[test]
    fn unknown_codes_fall_back_to_defaults() {
        let config = AppConfig {
            theme: "solarized".to_string(),
            language: "fr-FR".to_string(),
        };
        assert_eq!(config.theme().code(), "dark");
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn missing_fields_deserialize_with_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.language, "en-US");
    }
}
