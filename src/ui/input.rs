//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        _ => {}
    }

    match focus {
        Focus::Username | Focus::Name => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if is_plain_text(key.modifiers) => Some(Action::Input(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => Some(Action::RemoveSelected),
            _ => None,
        },
    }
}

/// 只有无修饰或 Shift 的按键才算文本输入
fn is_plain_text(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 左键点击列表条目 -> 删除该条目
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .entry_at(mouse.column, mouse.row)
            .map(|entry| Action::Remove(entry.id)),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => get_action(app.focus, key),
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        _ => None,
    };

    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::models::Entry;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with_entries(count: u64) -> App {
        let mut app = App::new(UiConfig::default());
        for id in 1..=count {
            app.list = app.list.append(Entry {
                id,
                name: format!("Name{id}"),
                username: format!("user{id}"),
            });
        }
        app.list_area = Rect::new(0, 10, 40, 8);
        app
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(
            get_action(Focus::Username, key(KeyCode::Char('q'))),
            Some(Action::Input('q'))
        );
        assert_eq!(
            get_action(Focus::Name, key(KeyCode::Enter)),
            Some(Action::Submit)
        );
        assert_eq!(
            get_action(Focus::Name, key(KeyCode::Backspace)),
            Some(Action::DeleteChar)
        );
    }

    #[test]
    fn test_modified_chars_not_typed() {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let event = KeyEvent::new(KeyCode::Char('u'), modifiers);
            assert_eq!(get_action(Focus::Username, event), None);
        }
        let shifted = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert_eq!(get_action(Focus::Name, shifted), Some(Action::Input('K')));
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(
            get_action(Focus::List, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            get_action(Focus::List, key(KeyCode::Char('j'))),
            Some(Action::MoveSelectionDown)
        );
        assert_eq!(
            get_action(Focus::List, key(KeyCode::Delete)),
            Some(Action::RemoveSelected)
        );
        assert_eq!(get_action(Focus::List, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_global_keys() {
        for focus in [Focus::Username, Focus::Name, Focus::List] {
            assert_eq!(get_action(focus, key(KeyCode::Esc)), Some(Action::Quit));
            assert_eq!(get_action(focus, key(KeyCode::Tab)), Some(Action::FocusNext));
            assert_eq!(
                get_action(focus, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_click_maps_to_entry() {
        let app = app_with_entries(3);
        // 第一行位于边框下方
        assert_eq!(get_mouse_action(&app, click(5, 11)), Some(Action::Remove(1)));
        assert_eq!(get_mouse_action(&app, click(5, 13)), Some(Action::Remove(3)));
    }

    #[test]
    fn test_click_outside_rows() {
        let app = app_with_entries(3);
        assert_eq!(get_mouse_action(&app, click(5, 10)), None); // 上边框
        assert_eq!(get_mouse_action(&app, click(5, 14)), None); // 空行
        assert_eq!(get_mouse_action(&app, click(0, 11)), None); // 左边框
        assert_eq!(get_mouse_action(&app, click(5, 2)), None);
    }

    #[test]
    fn test_click_respects_scroll_offset() {
        let mut app = app_with_entries(10);
        app.list_offset = 4;
        assert_eq!(get_mouse_action(&app, click(5, 11)), Some(Action::Remove(5)));
    }

    #[test]
    fn test_handle_event_ignores_release() {
        let mut app = app_with_entries(0);
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;

        assert!(!handle_event(&mut app, Event::Key(release)));
        assert_eq!(app.form.username, "");

        assert!(!handle_event(&mut app, Event::Key(key(KeyCode::Char('a')))));
        assert_eq!(app.form.username, "a");
        assert!(handle_event(&mut app, Event::Key(key(KeyCode::Esc))));
    }
}
