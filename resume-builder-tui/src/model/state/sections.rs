//! 章节页面状态
//!
//! 持有 resume-builder-core 的章节大纲，外加两样 UI 专属的东西：
//! 光标位置和进行中的拖拽。
//!
//! 拖拽遵循“预览不落地”：拎起章节后，↑/↓ 只改悬停位置，
//! 列表重排只发生在视图层的 display_order() 里；
//! 放下（Enter）才把移动提交给大纲，取消（Esc）则什么都不改。

use resume_builder_core::{Section, SectionOutline};

/// 拖拽状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// 拎起时章节所在的索引
    pub source: usize,
    /// 当前悬停的目标位置
    pub hover: usize,
}

/// 章节页面状态
#[derive(Debug)]
pub struct SectionsState {
    /// 章节大纲（数据唯一来源）
    pub outline: SectionOutline,
    /// 当前选中的索引
    pub selected: usize,
    /// 进行中的拖拽，None 表示没在拖
    pub drag: Option<DragState>,
}

impl SectionsState {
    /// 创建新的章节状态，从内置目录开始
    pub fn new() -> Self {
        Self {
            outline: SectionOutline::with_master(),
            selected: 0,
            drag: None,
        }
    }

    // ========== 列表导航 ==========

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.outline.is_empty() && self.selected < self.outline.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.outline.is_empty() {
            self.selected = self.outline.len() - 1;
        }
    }

    /// 获取当前选中的章节
    pub fn selected_section(&self) -> Option<&Section> {
        self.outline.sections().get(self.selected)
    }

    // ========== 拖拽 ==========

    /// 是否正在拖拽
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// 拎起当前选中的章节
    pub fn grab_selected(&mut self) {
        if self.selected < self.outline.len() {
            self.drag = Some(DragState {
                source: self.selected,
                hover: self.selected,
            });
        }
    }

    /// 悬停位置上移
    pub fn hover_previous(&mut self) {
        if let Some(drag) = &mut self.drag {
            if drag.hover > 0 {
                drag.hover -= 1;
            }
        }
    }

    /// 悬停位置下移
    pub fn hover_next(&mut self) {
        let len = self.outline.len();
        if let Some(drag) = &mut self.drag {
            if drag.hover < len.saturating_sub(1) {
                drag.hover += 1;
            }
        }
    }

    /// 放下拎起的章节，把移动提交给大纲
    pub fn drop_grabbed(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.outline.reorder(drag.source, Some(drag.hover));
            self.selected = drag.hover;
        }
    }

    /// 放弃拖拽，章节回到原位
    pub fn abort_grab(&mut self) {
        if let Some(drag) = self.drag.take() {
            // 没有目标位置的拖拽，大纲按无操作处理
            self.outline.reorder(drag.source, None);
            self.selected = drag.source;
        }
    }

    /// 渲染用的章节顺序
    ///
    /// 拖拽中返回预览顺序（拎起的章节插在悬停位置），
    /// 否则就是大纲的当前顺序
    pub fn display_order(&self) -> Vec<&Section> {
        let mut order: Vec<&Section> = self.outline.sections().iter().collect();
        if let Some(drag) = self.drag {
            if drag.source < order.len() {
                let grabbed = order.remove(drag.source);
                let dest = drag.hover.min(order.len());
                order.insert(dest, grabbed);
            }
        }
        order
    }

    /// 光标高亮的位置（拖拽中跟随悬停位置）
    pub fn cursor_position(&self) -> usize {
        self.drag.map_or(self.selected, |drag| drag.hover)
    }

    // ========== 重命名 ==========

    /// 是否处于重命名状态
    pub fn is_editing(&self) -> bool {
        self.outline.editing().is_some()
    }

    /// 开始重命名当前选中的章节
    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_section().map(|s| s.id.clone()) {
            self.outline.begin_edit(&id);
        }
    }

    /// 输入一个字符，名字即时生效
    pub fn push_edit_char(&mut self, c: char) {
        if let Some(id) = self.outline.editing().map(str::to_owned) {
            if let Some(section) = self.outline.get(&id) {
                let mut name = section.name.clone();
                name.push(c);
                self.outline.rename(&id, name);
            }
        }
    }

    /// 删掉名字末尾的一个字符
    pub fn pop_edit_char(&mut self) {
        if let Some(id) = self.outline.editing().map(str::to_owned) {
            if let Some(section) = self.outline.get(&id) {
                let mut name = section.name.clone();
                if name.pop().is_some() {
                    self.outline.rename(&id, name);
                }
            }
        }
    }

    /// 结束重命名，保留当前名字
    pub fn end_edit(&mut self) {
        self.outline.end_edit();
    }

    // ========== 开关与提交 ==========

    /// 切换当前选中章节的启用状态
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_section().map(|s| s.id.clone()) {
            self.outline.toggle_enabled(&id);
        }
    }

    /// 保存当前排布
    pub fn save(&mut self) {
        self.outline.save();
    }

    /// 放弃未保存的修改，回到目录排布
    pub fn cancel(&mut self) {
        self.drag = None;
        self.outline.cancel();
        self.selected = self.selected.min(self.outline.len().saturating_sub(1));
    }
}

impl Default for SectionsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &SectionsState) -> Vec<String> {
        state
            .outline
            .sections()
            .iter()
            .map(|s| s.id.clone())
            .collect()
    }

    fn display_ids(state: &SectionsState) -> Vec<String> {
        state
            .display_order()
            .iter()
            .map(|s| s.id.clone())
            .collect()
    }

    #[test]
    fn grab_previews_without_touching_outline() {
        let mut state = SectionsState::new();
        state.grab_selected();
        state.hover_next();
        state.hover_next();

        assert_eq!(display_ids(&state)[..3], ["section2", "section3", "section1"]);
        assert_eq!(ids(&state)[..3], ["section1", "section2", "section3"]);
        assert!(!state.outline.is_dirty());
    }

    #[test]
    fn drop_commits_the_preview_order() {
        let mut state = SectionsState::new();
        state.grab_selected();
        state.hover_next();
        state.hover_next();
        state.drop_grabbed();

        assert_eq!(ids(&state)[..3], ["section2", "section3", "section1"]);
        assert_eq!(state.selected, 2);
        assert!(!state.is_dragging());
        assert!(state.outline.is_dirty());
    }

    #[test]
    fn abort_restores_original_order() {
        let mut state = SectionsState::new();
        state.grab_selected();
        state.hover_next();
        state.abort_grab();

        assert_eq!(ids(&state)[..2], ["section1", "section2"]);
        assert_eq!(display_ids(&state), ids(&state));
        assert_eq!(state.cursor_position(), 0);
        assert!(!state.is_dragging());
        assert!(!state.outline.is_dirty());
    }

    #[test]
    fn hover_is_clamped_to_list_bounds() {
        let mut state = SectionsState::new();
        state.grab_selected();
        state.hover_previous();
        assert_eq!(state.cursor_position(), 0);

        state.abort_grab();
        state.select_last();
        state.grab_selected();
        state.hover_next();
        assert_eq!(state.cursor_position(), state.outline.len() - 1);
    }

    #[test]
    fn cursor_follows_hover_while_dragging() {
        let mut state = SectionsState::new();
        state.select_next();
        state.grab_selected();
        assert_eq!(state.cursor_position(), 1);

        state.hover_next();
        assert_eq!(state.cursor_position(), 2);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn rename_typing_updates_name_live() {
        let mut state = SectionsState::new();
        state.begin_edit_selected();
        assert!(state.is_editing());

        state.push_edit_char('!');
        let section = state.selected_section().unwrap();
        assert_eq!(section.name, "Profile Summary!");
        assert!(state.outline.is_dirty());

        state.pop_edit_char();
        let section = state.selected_section().unwrap();
        assert_eq!(section.name, "Profile Summary");
    }

    #[test]
    fn pop_edit_char_stops_at_empty_name() {
        let mut state = SectionsState::new();
        state.begin_edit_selected();
        for _ in 0..100 {
            state.pop_edit_char();
        }

        assert_eq!(state.selected_section().unwrap().name, "");
    }

    #[test]
    fn typing_outside_rename_mode_is_ignored() {
        let mut state = SectionsState::new();
        state.push_edit_char('x');

        assert_eq!(state.selected_section().unwrap().name, "Profile Summary");
        assert!(!state.outline.is_dirty());
    }

    #[test]
    fn end_edit_clears_rename_mode() {
        let mut state = SectionsState::new();
        state.begin_edit_selected();
        state.end_edit();

        assert!(!state.is_editing());
    }

    #[test]
    fn toggle_selected_flips_enabled() {
        let mut state = SectionsState::new();
        state.toggle_selected();

        assert!(!state.selected_section().unwrap().enabled);
        assert!(state.outline.is_dirty());
    }

    #[test]
    fn cancel_discards_changes_and_drag() {
        let mut state = SectionsState::new();
        state.toggle_selected();
        state.select_next();
        state.grab_selected();
        state.cancel();

        assert!(!state.is_dragging());
        assert!(!state.outline.is_dirty());
        assert!(state.outline.sections()[0].enabled);
    }

    #[test]
    fn selection_stays_inside_the_list() {
        let mut state = SectionsState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_last();
        assert_eq!(state.selected, 8);

        state.select_next();
        assert_eq!(state.selected, 8);
    }
}
