//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 表单
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Submit,      // Enter

    // 列表
    MoveSelectionUp,
    MoveSelectionDown,
    RemoveSelected,
    Remove(u64), // 鼠标点击条目
}
