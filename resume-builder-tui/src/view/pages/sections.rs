//! 章节列表页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::model::App;

/// 渲染章节列表页面
///
/// 拖拽进行中时列表按悬停位置的预览顺序绘制，被抓起的章节
/// 用黄色高亮标出。重命名进行中在名字末尾画一个输入光标。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let sections = &app.sections;
    let cursor = sections.cursor_position();
    let dragging = sections.is_dragging();
    let editing = sections.is_editing();

    let items: Vec<ListItem> = sections
        .display_order()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let is_cursor = i == cursor;

            let status_icon = if section.enabled { "●" } else { "○" };
            let status_color = if section.enabled {
                Color::Green
            } else {
                Color::Gray
            };

            // 拖拽中光标行就是被抓起的章节
            let style = if is_cursor && dragging {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_cursor {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if section.enabled {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let status_style = if is_cursor && dragging {
                Style::default().fg(status_color).bg(Color::Yellow)
            } else if is_cursor {
                Style::default().fg(status_color).bg(Color::Cyan)
            } else {
                Style::default().fg(status_color)
            };

            let dim_style = if is_cursor && dragging {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if is_cursor {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let prefix = if is_cursor && dragging { "↕ " } else { "  " };

            // 重命名中在名字后面画一个输入光标
            let name = if is_cursor && editing {
                format!("{}▎", section.name)
            } else {
                section.name.clone()
            };

            // 名字后面用暗色附上描述，放不下的部分由列表自行截断
            let description = format!("  {}", section.description);

            let line = Line::from(vec![
                Span::raw(prefix),
                Span::styled(status_icon, status_style),
                Span::raw(" "),
                Span::styled(name, style),
                Span::styled(description, dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    fn render_to_buffer(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(app, frame, area);
            })
            .expect("draw sections page");
        terminal.backend().buffer().clone()
    }

    fn buffer_rows(buffer: &Buffer) -> Vec<String> {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn rows_show_badge_name_and_description() {
        let app = App::default();
        let rows = buffer_rows(&render_to_buffer(&app));

        let profile = rows
            .iter()
            .find(|row| row.contains("Profile Summary"))
            .expect("missing profile row");
        assert!(profile.contains("●"));
        assert!(profile.contains("A summary of your profile"));

        let education = rows
            .iter()
            .find(|row| row.contains("Education"))
            .expect("missing education row");
        assert!(education.contains("Your educational background"));
    }

    #[test]
    fn description_renders_dim_on_plain_rows() {
        let app = App::default();
        let buffer = render_to_buffer(&app);
        let rows = buffer_rows(&buffer);

        let y = rows
            .iter()
            .position(|row| row.contains("Your work experience"))
            .expect("missing work experience row");
        let start = rows[y].find("Your work experience").expect("missing snippet");
        let x = rows[y][..start].chars().count();

        let cell = &buffer.content[y * buffer.area.width as usize + x];
        assert_eq!(cell.fg, Color::DarkGray);
    }

    #[test]
    fn disabled_sections_show_the_hollow_badge() {
        let mut app = App::default();
        app.sections.outline.toggle_enabled("section4");
        let rows = buffer_rows(&render_to_buffer(&app));

        let row = rows
            .iter()
            .find(|row| row.contains("Work Experience"))
            .expect("missing work experience row");
        assert!(row.contains("○"));
    }
}
