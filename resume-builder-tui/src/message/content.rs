//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、章节排序、重命名等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 章节排序 ==========
    /// 拎起当前选中的章节，进入拖拽状态
    Grab,
    /// 把拎起的章节放到当前悬停位置
    Drop,
    /// 放弃拖拽，章节回到原位
    AbortDrag,

    // ========== 章节重命名 ==========
    /// 开始重命名当前选中的章节
    BeginEdit,
    /// 输入字符（重命名状态下）
    EditInput(char),
    /// 删除字符（重命名状态下的 Backspace）
    EditBackspace,
    /// 结束重命名，保留当前输入
    EndEdit,

    // ========== 章节开关与详情 ==========
    /// 切换当前章节的启用状态
    ToggleEnabled,
    /// 查看当前章节的描述
    ShowDescription,

    // ========== 整体提交 ==========
    /// 保存当前章节排布
    Save,
    /// 放弃未保存的修改，恢复目录排布
    Cancel,

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
