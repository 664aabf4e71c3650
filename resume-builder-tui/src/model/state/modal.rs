//! 弹窗/对话框状态

/// 弹窗枚举
///
/// 每种弹窗一个变体，携带渲染它需要的全部数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 章节描述
    Description {
        /// 章节名
        name: String,
        /// 描述文本
        description: String,
    },
    /// 快捷键帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示章节描述弹窗
    ///
    /// 描述文本在打开时就已经取好，弹窗不再回查大纲
    pub fn show_description(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.active = Some(Modal::Description {
            name: name.into(),
            description: description.into(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
