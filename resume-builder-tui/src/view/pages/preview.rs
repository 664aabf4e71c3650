//! 预览页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

/// 渲染预览页面
///
/// 按当前工作顺序列出启用中的章节，停用的章节不出现。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let enabled: Vec<_> = app
        .sections
        .outline
        .sections()
        .iter()
        .filter(|s| s.enabled)
        .collect();

    if enabled.is_empty() {
        render_empty(frame, area);
        return;
    }

    let mut lines = vec![Line::from("")];
    for (i, section) in enabled.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                section.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!("     {}", section.description),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.preview.no_sections),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.preview.enable_hint),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(content);
    frame.render_widget(paragraph, area);
}
