//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和三个状态更新处理器

use tracing::{debug, info};

use super::actions::Action;
use super::state::App;
use crate::models::{Entry, FormField, FormState};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::Input(c) => {
                if let Some(field) = self.focus.field() {
                    let mut value = self.form.get(field).to_string();
                    value.push(c);
                    self.on_change(field, value);
                }
            }
            Action::DeleteChar => {
                if let Some(field) = self.focus.field() {
                    let mut value = self.form.get(field).to_string();
                    value.pop();
                    self.on_change(field, value);
                }
            }
            Action::Submit => {
                if self.focus.field().is_some() {
                    self.on_submit();
                }
            }

            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::RemoveSelected => {
                if let Some(id) = self.selected_entry().map(|entry| entry.id) {
                    self.on_remove(id);
                }
            }
            Action::Remove(id) => self.on_remove(id),
        }
        false
    }

    // ============ 表单 ============

    /// 替换单个表单字段
    pub fn on_change(&mut self, field: FormField, value: String) {
        debug!(field = field.as_str(), len = value.len(), "field changed");
        self.form = self.form.set(field, value);
    }

    /// 提交表单：先追加条目，再推进 id
    pub fn on_submit(&mut self) {
        let entry = Entry {
            id: self.next_id.peek(),
            name: self.form.name.clone(),
            username: self.form.username.clone(),
        };
        let id = entry.id;

        self.list = self.list.append(entry);
        self.form = FormState::default();
        self.next_id.advance();

        info!(id, total = self.list.len(), "entry added");
        self.message = Some(format!("已添加 #{}", id));
    }

    // ============ 列表 ============

    /// 按 id 删除条目，不存在时不做任何事
    pub fn on_remove(&mut self, id: u64) {
        let before = self.list.len();
        self.list = self.list.remove(id);

        if self.list.len() < before {
            info!(id, total = self.list.len(), "entry removed");
            self.message = Some(format!("已删除 #{}", id));
        } else {
            debug!(id, "remove ignored, no such entry");
        }
        self.clamp_selection();
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.list.len() {
            self.selected_index += 1;
        }
    }
}
