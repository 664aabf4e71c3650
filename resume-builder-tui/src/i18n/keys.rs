//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `home.*`, `preview.*`, `settings.*`
//! 3. **状态栏消息归 `status.*`**：操作结果的一句话反馈
//! 4. **键盘提示归 `hints.*`**：状态栏和帮助弹窗共用的动作词
//! 5. **弹窗内容归 `modal.*` / `help.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 章节页面文本
    pub sections: SectionsTexts,
    /// 预览页面文本
    pub preview: PreviewTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 键盘提示（状态栏 + 帮助弹窗）
    pub hints: HintTexts,
    /// 描述弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    /// 导航面板标题
    pub title: &'static str,
    pub home: &'static str,
    pub sections: &'static str,
    pub preview: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub tagline: &'static str,
    /// 目录章节总数下方的说明
    pub total_label: &'static str,
    /// 启用数量统计框的标题
    pub enabled_title: &'static str,
    /// 启用数量下方的说明
    pub enabled_label: &'static str,
}

/// 章节页面文本
pub struct SectionsTexts {
    /// 页面标题上的未保存提醒
    pub unsaved: &'static str,
}

/// 预览页面文本
pub struct PreviewTexts {
    pub no_sections: &'static str,
    pub enable_hint: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    /// 主题设置
    pub theme: ThemeTexts,
    /// 语言设置
    pub language: LanguageTexts,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

/// 状态栏消息（操作结果的一句话反馈）
pub struct StatusTexts {
    /// 拖拽开始，后面拼接章节名
    pub moving: &'static str,
    pub order_updated: &'static str,
    pub move_cancelled: &'static str,
    pub saved: &'static str,
    pub discarded: &'static str,
    pub section_missing: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示动作词（按键字符本身不翻译）
pub struct HintTexts {
    pub switch_panels: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub select: &'static str,
    pub grab: &'static str,
    pub toggle: &'static str,
    pub rename: &'static str,
    pub describe: &'static str,
    pub save: &'static str,
    pub discard: &'static str,
    pub adjust: &'static str,
    pub move_section: &'static str,
    pub drop: &'static str,
    pub abort: &'static str,
    pub done: &'static str,
    pub delete_char: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 描述弹窗文本
pub struct ModalTexts {
    pub close_hint: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub sections: &'static str,
    pub dragging: &'static str,
    pub close_hint: &'static str,
}
