//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            handle_select_previous(app);
        }
        ContentMessage::SelectNext => {
            handle_select_next(app);
        }
        ContentMessage::SelectFirst => {
            handle_select_first(app);
        }
        ContentMessage::SelectLast => {
            handle_select_last(app);
        }

        // ========== 章节排序 ==========
        ContentMessage::Grab => {
            handle_grab(app);
        }
        ContentMessage::Drop => {
            handle_drop(app);
        }
        ContentMessage::AbortDrag => {
            handle_abort_drag(app);
        }

        // ========== 章节重命名 ==========
        ContentMessage::BeginEdit => {
            handle_begin_edit(app);
        }
        ContentMessage::EditInput(c) => {
            handle_edit_input(app, c);
        }
        ContentMessage::EditBackspace => {
            handle_edit_backspace(app);
        }
        ContentMessage::EndEdit => {
            handle_end_edit(app);
        }

        // ========== 章节开关与详情 ==========
        ContentMessage::ToggleEnabled => {
            handle_toggle_enabled(app);
        }
        ContentMessage::ShowDescription => {
            handle_show_description(app);
        }

        // ========== 整体提交 ==========
        ContentMessage::Save => {
            handle_save(app);
        }
        ContentMessage::Cancel => {
            handle_cancel(app);
        }

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => {
            handle_toggle_prev(app);
        }
        ContentMessage::ToggleNext => {
            handle_toggle_next(app);
        }
    }
}

// ========== 列表导航处理 ==========

fn handle_select_previous(app: &mut App) {
    match &app.current_page {
        Page::Sections => {
            // 拖拽中 ↑ 移动的是悬停位置，不是光标
            if app.sections.is_dragging() {
                app.sections.hover_previous();
            } else {
                app.sections.select_previous();
            }
        }
        Page::Settings => {
            app.settings.select_previous();
        }
        _ => {}
    }
}

fn handle_select_next(app: &mut App) {
    match &app.current_page {
        Page::Sections => {
            if app.sections.is_dragging() {
                app.sections.hover_next();
            } else {
                app.sections.select_next();
            }
        }
        Page::Settings => {
            app.settings.select_next();
        }
        _ => {}
    }
}

fn handle_select_first(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.select_first();
    }
}

fn handle_select_last(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.select_last();
    }
}

// ========== 章节排序处理 ==========

fn handle_grab(app: &mut App) {
    if !matches!(app.current_page, Page::Sections) {
        return;
    }
    if let Some(section) = app.sections.selected_section() {
        let name = section.name.clone();
        app.sections.grab_selected();
        app.set_status(format!("{}: {name}", t().status.moving));
    }
}

fn handle_drop(app: &mut App) {
    if matches!(app.current_page, Page::Sections) && app.sections.is_dragging() {
        app.sections.drop_grabbed();
        app.set_status(t().status.order_updated);
    }
}

fn handle_abort_drag(app: &mut App) {
    if matches!(app.current_page, Page::Sections) && app.sections.is_dragging() {
        app.sections.abort_grab();
        app.set_status(t().status.move_cancelled);
    }
}

// ========== 章节重命名处理 ==========

fn handle_begin_edit(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.begin_edit_selected();
    }
}

fn handle_edit_input(app: &mut App, c: char) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.push_edit_char(c);
    }
}

fn handle_edit_backspace(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.pop_edit_char();
    }
}

fn handle_end_edit(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.end_edit();
    }
}

// ========== 章节开关与详情处理 ==========

fn handle_toggle_enabled(app: &mut App) {
    if matches!(app.current_page, Page::Sections) {
        app.sections.toggle_selected();
    }
}

fn handle_show_description(app: &mut App) {
    if !matches!(app.current_page, Page::Sections) {
        return;
    }
    let Some(section) = app.sections.selected_section() else {
        return;
    };
    let id = section.id.clone();
    let name = section.name.clone();

    match app.sections.outline.describe(&id) {
        Ok(description) => {
            app.modal.show_description(name, description);
        }
        Err(err) => {
            if err.is_expected() {
                log::warn!("describe failed: {err}");
            } else {
                log::error!("describe failed: {err}");
            }
            app.set_status(t().status.section_missing);
        }
    }
}

// ========== 整体提交处理 ==========

fn handle_save(app: &mut App) {
    if matches!(app.current_page, Page::Sections) && app.sections.outline.is_dirty() {
        app.sections.save();
        app.set_status(t().status.saved);
    }
}

fn handle_cancel(app: &mut App) {
    if matches!(app.current_page, Page::Sections) && app.sections.outline.is_dirty() {
        app.sections.cancel();
        app.set_status(t().status.discarded);
    }
}

// ========== 设置页面处理 ==========

fn handle_toggle_prev(app: &mut App) {
    if matches!(app.current_page, Page::Settings) {
        app.settings.toggle_prev();
    }
}

fn handle_toggle_next(app: &mut App) {
    if matches!(app.current_page, Page::Settings) {
        app.settings.toggle_next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modal;

    fn app_on_sections() -> App {
        let mut app = App::default();
        app.current_page = Page::Sections;
        app
    }

    #[test]
    fn arrow_keys_route_to_hover_while_dragging() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::Grab);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::SelectNext);

        assert_eq!(app.sections.cursor_position(), 2);
        assert_eq!(app.sections.selected, 0);
    }

    #[test]
    fn drop_commits_the_hovered_position() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::Grab);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Drop);

        assert_eq!(app.sections.outline.sections()[0].id, "section2");
        assert_eq!(app.sections.outline.sections()[1].id, "section1");
        assert!(app.sections.outline.is_dirty());
        assert!(!app.sections.is_dragging());
    }

    #[test]
    fn abort_leaves_outline_untouched() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::Grab);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::AbortDrag);

        assert_eq!(app.sections.outline.sections()[0].id, "section1");
        assert!(!app.sections.outline.is_dirty());
        assert!(!app.sections.is_dragging());
    }

    #[test]
    fn rename_messages_drive_live_edit() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::BeginEdit);
        update(&mut app, ContentMessage::EditInput('!'));
        update(&mut app, ContentMessage::EndEdit);

        assert_eq!(
            app.sections.selected_section().unwrap().name,
            "Profile Summary!"
        );
        assert!(!app.sections.is_editing());
        assert!(app.sections.outline.is_dirty());
    }

    #[test]
    fn describe_opens_modal_with_catalog_text() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::ShowDescription);

        match &app.modal.active {
            Some(Modal::Description { name, description }) => {
                assert_eq!(name, "Profile Summary");
                assert_eq!(description, "A summary of your profile");
            }
            other => panic!("unexpected modal: {other:?}"),
        }
    }

    #[test]
    fn save_is_ignored_while_clean() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::Save);

        assert!(app.status_message.is_none());
        assert!(!app.sections.outline.is_dirty());
    }

    #[test]
    fn cancel_restores_catalog_layout() {
        let mut app = app_on_sections();
        update(&mut app, ContentMessage::Grab);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Drop);
        update(&mut app, ContentMessage::Cancel);

        assert_eq!(app.sections.outline.sections()[0].id, "section1");
        assert!(!app.sections.outline.is_dirty());
    }

    #[test]
    fn section_gestures_do_nothing_on_other_pages() {
        let mut app = App::default();
        update(&mut app, ContentMessage::Grab);
        update(&mut app, ContentMessage::ToggleEnabled);

        assert!(!app.sections.is_dragging());
        assert!(!app.sections.outline.is_dirty());
    }
}
