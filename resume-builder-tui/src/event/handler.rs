//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 重命名进行中，键盘完全交给名字输入
    if app.sections.is_editing() {
        return handle_rename_keys(key);
    }

    // 拖拽进行中，只认移动/放下/取消
    if app.sections.is_dragging() {
        return handle_drag_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 根据当前页面处理特定按键
    match &app.current_page {
        Page::Sections => handle_sections_keys(key),
        Page::Settings => handle_settings_keys(key),
        _ => AppMessage::Noop,
    }
}

/// 处理章节页面的按键
fn handle_sections_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Home: 跳到第一项
        KeyCode::Home => {
            AppMessage::Content(ContentMessage::SelectFirst)
        }
        // End: 跳到最后一项
        KeyCode::End => {
            AppMessage::Content(ContentMessage::SelectLast)
        }
        // Enter: 拎起当前章节，进入拖拽
        KeyCode::Enter => {
            AppMessage::Content(ContentMessage::Grab)
        }
        // 空格: 启用/停用章节
        KeyCode::Char(' ') => {
            AppMessage::Content(ContentMessage::ToggleEnabled)
        }
        // r: 重命名
        KeyCode::Char('r') => {
            AppMessage::Content(ContentMessage::BeginEdit)
        }
        // d: 查看描述
        KeyCode::Char('d') => {
            AppMessage::Content(ContentMessage::ShowDescription)
        }
        // s: 保存排布
        KeyCode::Char('s') => {
            AppMessage::Content(ContentMessage::Save)
        }
        // c: 放弃修改
        KeyCode::Char('c') => {
            AppMessage::Content(ContentMessage::Cancel)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理拖拽中的按键
fn handle_drag_keys(key: KeyEvent) -> AppMessage {
    // Ctrl+C 在拖拽中是取消拖拽，不是退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Content(ContentMessage::AbortDrag);
    }

    match key.code {
        // ↑ 或 k: 悬停位置上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 悬停位置下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Enter: 放下
        KeyCode::Enter => {
            AppMessage::Content(ContentMessage::Drop)
        }
        // Esc: 放弃拖拽
        KeyCode::Esc => {
            AppMessage::Content(ContentMessage::AbortDrag)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理重命名中的按键
fn handle_rename_keys(key: KeyEvent) -> AppMessage {
    // Ctrl+C 在重命名中是结束输入，不是退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Content(ContentMessage::EndEdit);
    }

    match key.code {
        // Enter 或 Esc: 结束重命名，保留当前名字
        KeyCode::Enter | KeyCode::Esc => {
            AppMessage::Content(ContentMessage::EndEdit)
        }
        // Backspace: 删除末尾字符
        KeyCode::Backspace => {
            AppMessage::Content(ContentMessage::EditBackspace)
        }
        // 字符输入（大写字母会带 SHIFT 修饰）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::EditInput(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    // 描述和帮助弹窗只响应关闭按键
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // ←: 切换到上一个值
        KeyCode::Left => {
            AppMessage::Content(ContentMessage::TogglePrev)
        }
        // →: 切换到下一个值
        KeyCode::Right => {
            AppMessage::Content(ContentMessage::ToggleNext)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app_on_sections() -> App {
        let mut app = App::default();
        app.current_page = Page::Sections;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn ctrl_c_quits_outside_special_modes() {
        let app = App::default();
        let msg = handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app);

        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn open_modal_swallows_escape() {
        let mut app = App::default();
        app.modal.show_help();
        let msg = handle_event(press(KeyCode::Esc), &app);

        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }

    #[test]
    fn sections_enter_starts_a_drag() {
        let app = app_on_sections();
        let msg = handle_event(press(KeyCode::Enter), &app);

        assert!(matches!(msg, AppMessage::Content(ContentMessage::Grab)));
    }

    #[test]
    fn dragging_enter_drops_and_escape_aborts() {
        let mut app = app_on_sections();
        app.sections.grab_selected();

        let drop = handle_event(press(KeyCode::Enter), &app);
        assert!(matches!(drop, AppMessage::Content(ContentMessage::Drop)));

        let abort = handle_event(press(KeyCode::Esc), &app);
        assert!(matches!(
            abort,
            AppMessage::Content(ContentMessage::AbortDrag)
        ));
    }

    #[test]
    fn dragging_ctrl_c_aborts_instead_of_quitting() {
        let mut app = app_on_sections();
        app.sections.grab_selected();
        let msg = handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app);

        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::AbortDrag)
        ));
    }

    #[test]
    fn rename_mode_captures_action_letters() {
        let mut app = app_on_sections();
        app.sections.begin_edit_selected();
        let msg = handle_event(press(KeyCode::Char('s')), &app);

        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::EditInput('s'))
        ));
    }

    #[test]
    fn rename_mode_accepts_shifted_chars() {
        let mut app = app_on_sections();
        app.sections.begin_edit_selected();
        let msg = handle_event(press_with(KeyCode::Char('A'), KeyModifiers::SHIFT), &app);

        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::EditInput('A'))
        ));
    }

    #[test]
    fn tab_toggles_focus_panels() {
        let app = App::default();
        let msg = handle_event(press(KeyCode::Tab), &app);

        assert!(matches!(msg, AppMessage::ToggleFocus));
    }

    #[test]
    fn navigation_focus_maps_arrows_to_nav_messages() {
        let app = App::default();
        let msg = handle_event(press(KeyCode::Down), &app);

        assert!(matches!(
            msg,
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }
}
