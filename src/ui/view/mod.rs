//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, Focus};
use components::render_input_widget;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 用户名
            Constraint::Length(3), // 姓名
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_input_widget(
        frame,
        chunks[1],
        "用户名",
        &app.form.username,
        &app.ui.username_placeholder,
        app.focus == Focus::Username,
    );
    render_input_widget(
        frame,
        chunks[2],
        "姓名",
        &app.form.name,
        &app.ui.name_placeholder,
        app.focus == Focus::Name,
    );
    render_list(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.ui.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let list_focused = app.focus == Focus::List;

    let items: Vec<ListItem> = app
        .list
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if list_focused && i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(Line::from(vec![Span::styled(entry.to_string(), style)]))
        })
        .collect();

    let border_style = if list_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list_widget = List::new(items).block(
        Block::default()
            .title(format!("列表 ({})", app.list.len()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    let mut state = ListState::default().with_offset(app.list_offset);
    if list_focused && !app.list.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list_widget, area, &mut state);

    // 记录本帧布局，供鼠标点击定位
    app.list_area = area;
    app.list_offset = state.offset();
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.focus {
        Focus::Username | Focus::Name => "[Enter] 提交  [Tab] 切换  [Esc] 退出  点击条目删除",
        Focus::List => "[j/k] 导航  [Enter/d] 删除  [Tab] 切换  [q] 退出",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
