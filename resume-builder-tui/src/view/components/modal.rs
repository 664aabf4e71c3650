//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Description { name, description } => render_description(frame, name, description),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染章节描述弹窗
fn render_description(frame: &mut Frame, name: &str, description: &str) {
    let texts = t();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", name))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(description, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(55, 27, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let lines = vec![
        Line::styled(
            texts.help.global,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        help_line("  Tab    ", texts.hints.switch_panels),
        help_line("  ↑↓/jk  ", texts.hints.navigate),
        help_line("  Enter  ", texts.hints.open),
        help_line("  Esc    ", texts.hints.back),
        help_line("  ?      ", texts.hints.help),
        help_line("  Alt+q  ", texts.hints.quit),
        Line::from(""),
        Line::styled(
            texts.help.sections,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        help_line("  Enter  ", texts.hints.grab),
        help_line("  Space  ", texts.hints.toggle),
        help_line("  r      ", texts.hints.rename),
        help_line("  d      ", texts.hints.describe),
        help_line("  s      ", texts.hints.save),
        help_line("  c      ", texts.hints.discard),
        Line::from(""),
        Line::styled(
            texts.help.dragging,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        help_line("  ↑↓     ", texts.hints.move_section),
        help_line("  Enter  ", texts.hints.drop),
        help_line("  Esc    ", texts.hints.abort),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 构建一行快捷键说明
fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}
