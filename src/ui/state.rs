//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::Rect;

use crate::config::UiConfig;
use crate::models::{Entry, EntryList, FormField, FormState, IdCounter};

/// 应用状态
pub struct App {
    pub form: FormState,
    pub list: EntryList,
    pub next_id: IdCounter,
    pub focus: Focus,
    pub selected_index: usize,
    pub message: Option<String>,
    pub ui: UiConfig,
    /// 上一帧列表区域（含边框），用于鼠标命中
    pub list_area: Rect,
    /// 上一帧列表滚动偏移
    pub list_offset: usize,
}

/// 当前焦点
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Username,
    Name,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Name,
            Focus::Name => Focus::List,
            Focus::List => Focus::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::List,
            Focus::Name => Focus::Username,
            Focus::List => Focus::Name,
        }
    }

    /// 焦点所在的表单字段
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Username => Some(FormField::Username),
            Focus::Name => Some(FormField::Name),
            Focus::List => None,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(ui: UiConfig) -> Self {
        Self {
            form: FormState::default(),
            list: EntryList::new(),
            next_id: IdCounter::new(),
            focus: Focus::Username,
            selected_index: 0,
            message: None,
            ui,
            list_area: Rect::default(),
            list_offset: 0,
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.list.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.list.len() {
            self.selected_index = self.list.len() - 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.list.get(self.selected_index)
    }

    /// 屏幕坐标对应的条目
    pub fn entry_at(&self, column: u16, row: u16) -> Option<&Entry> {
        let area = self.list_area;
        let inside_x = column > area.x && column < area.right().saturating_sub(1);
        let inside_y = row > area.y && row < area.bottom().saturating_sub(1);
        if !inside_x || !inside_y {
            return None;
        }
        let index = self.list_offset + usize::from(row - area.y - 1);
        self.list.get(index)
    }
}
