//! 页面路由定义

/// 页面枚举
///
/// 四个页面平级，都是列表页，页面标题由 view 层按当前语言取
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 章节排布
    Sections,
    /// 简历预览
    Preview,
    /// 设置
    Settings,
}
