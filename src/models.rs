use std::fmt;

use crate::draft::produce;

/// 已登记的条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub name: String,
    pub username: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.name)
    }
}

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Name,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Name => "name",
        }
    }
}

/// 正在输入的表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub username: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Name => &self.name,
        }
    }

    /// 替换单个字段（草稿写法）
    pub fn set(&self, field: FormField, value: String) -> FormState {
        produce(self, |draft| match field {
            FormField::Username => draft.username = value,
            FormField::Name => draft.name = value,
        })
    }

    /// 替换单个字段（手动拷贝写法），与 `set` 结果一致，仅用于对照
    #[allow(dead_code)]
    pub fn with_field(&self, field: FormField, value: String) -> FormState {
        match field {
            FormField::Username => FormState {
                username: value,
                ..self.clone()
            },
            FormField::Name => FormState {
                name: value,
                ..self.clone()
            },
        }
    }
}

/// 已提交条目列表，保持插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    pub entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// 追加到末尾（草稿写法）
    pub fn append(&self, entry: Entry) -> EntryList {
        produce(self, |draft| draft.entries.push(entry))
    }

    /// 追加到末尾（手动拷贝写法），与 `append` 结果一致，仅用于对照
    #[allow(dead_code)]
    pub fn appended(&self, entry: Entry) -> EntryList {
        EntryList {
            entries: self
                .entries
                .iter()
                .cloned()
                .chain(std::iter::once(entry))
                .collect(),
        }
    }

    /// 移除第一个匹配 id 的条目；没有匹配时原样返回（草稿写法）
    pub fn remove(&self, id: u64) -> EntryList {
        produce(self, |draft| {
            if let Some(index) = draft.position(id) {
                draft.entries.remove(index);
            }
        })
    }

    /// 移除第一个匹配 id 的条目（手动拷贝写法），与 `remove` 结果一致，仅用于对照
    #[allow(dead_code)]
    pub fn without(&self, id: u64) -> EntryList {
        let Some(index) = self.position(id) else {
            return self.clone();
        };
        EntryList {
            entries: self
                .entries
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, entry)| entry.clone())
                .collect(),
        }
    }
}

/// 单调递增的 id 计数器，从 1 开始，不复用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// 下一次提交将使用的 id
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn advance(&mut self) {
        self.next += 1;
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
