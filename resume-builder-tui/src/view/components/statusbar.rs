//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc, enabled)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        if *enabled {
            spans.push(Span::styled(*key, Styles::hint_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, Styles::hint_desc()));
        } else {
            spans.push(Span::styled(*key, Styles::hint_disabled()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, Styles::hint_disabled()));
        }
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        // Add分隔符
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
///
/// 第三个元组元素标记该快捷键当前是否可用，不可用的置灰显示。
fn get_hints(app: &App) -> Vec<(&'static str, &'static str, bool)> {
    let texts = t();
    let mut hints: Vec<(&'static str, &'static str, bool)> = Vec::new();

    // 弹窗、重命名、拖拽三种模式各自接管键盘，提示也跟着换
    if app.modal.is_open() {
        hints.push(("Esc/Enter", texts.hints.close, true));
        return hints;
    }
    if app.sections.is_editing() {
        hints.push(("Enter/Esc", texts.hints.done, true));
        hints.push(("Backspace", texts.hints.delete_char, true));
        return hints;
    }
    if app.sections.is_dragging() {
        hints.push(("↑↓", texts.hints.move_section, true));
        hints.push(("Enter", texts.hints.drop, true));
        hints.push(("Esc", texts.hints.abort, true));
        return hints;
    }

    // 全局快捷键
    hints.push(("Tab", texts.hints.switch_panels, true));

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", texts.hints.navigate, true));
            hints.push(("Enter", texts.hints.open, true));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home | Page::Preview => {}
            Page::Sections => {
                let dirty = app.sections.outline.is_dirty();
                hints.push(("↑↓", texts.hints.select, true));
                hints.push(("Enter", texts.hints.grab, true));
                hints.push(("Space", texts.hints.toggle, true));
                hints.push(("r", texts.hints.rename, true));
                hints.push(("d", texts.hints.describe, true));
                // 没有未保存修改时，保存和放弃不可用
                hints.push(("s", texts.hints.save, dirty));
                hints.push(("c", texts.hints.discard, dirty));
            }
            Page::Settings => {
                hints.push(("↑↓", texts.hints.select, true));
                hints.push(("←→", texts.hints.adjust, true));
            }
        },
    }

    // 帮助与退出
    hints.push(("?", texts.hints.help, true));
    hints.push(("Alt+q", texts.hints.quit, true));

    hints
}
