//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    // 欢迎信息
    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.tagline),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    let welcome_widget = Paragraph::new(welcome);
    frame.render_widget(welcome_widget, layout[0]);

    // 统计信息
    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(layout[1]);

    let outline = &app.sections.outline;
    let total = outline.len();
    let enabled = outline.sections().iter().filter(|s| s.enabled).count();

    // 目录章节总数
    let catalog_block = Block::default()
        .title(format!(" {} ", texts.nav.sections))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let catalog_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {total}"),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.home.total_label),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(catalog_block);

    frame.render_widget(catalog_content, stats_layout[0]);

    // 启用中的章节数
    let enabled_block = Block::default()
        .title(format!(" {} ", texts.home.enabled_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let enabled_content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {enabled}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", texts.home.enabled_label),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(enabled_block);

    frame.render_widget(enabled_content, stats_layout[1]);
}
