//! 结构化拷贝更新
//!
//! 从旧状态克隆出一份草稿，在草稿上直接修改，返回新的快照；旧状态保持不变。

/// 基于 `base` 生成新快照，`recipe` 可以随意修改草稿
pub fn produce<T, F>(base: &T, recipe: F) -> T
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut draft = base.clone();
    recipe(&mut draft);
    draft
}
