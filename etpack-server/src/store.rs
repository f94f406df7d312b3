//! 表单顺序存储
//!
//! 进程内存中的 部门 id → 表单列表 映射。进程重启后清空。

use dashmap::DashMap;
use shared::FormDescriptor;

#[derive(Debug, Default)]
pub struct FormStore {
    lists: DashMap<String, Vec<FormDescriptor>>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最后写入的列表，从未写入时为空
    pub fn read(&self, department: &str) -> Vec<FormDescriptor> {
        self.lists
            .get(department)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// 整体替换部门的列表
    pub fn write(&self, department: &str, forms: Vec<FormDescriptor>) -> Vec<FormDescriptor> {
        self.lists.insert(department.to_string(), forms.clone());
        forms
    }

    /// 已写入过的部门数
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
