//! 通用 UI 组件
//!
//! 输入框等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// [组件] 带有标题、占位符和样式的单行输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = if value.is_empty() {
        Line::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else if is_focused {
        Line::styled(
            value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::raw(value)
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if is_focused {
        let width = u16::try_from(Line::raw(value).width()).unwrap_or(u16::MAX);
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1).saturating_add(width).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}
