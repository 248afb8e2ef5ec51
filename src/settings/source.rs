//! 设置源契约
//!
//! 设置源是一组具名布尔值加上一张元数据表。面板只通过 `get`/`set` 访问它，
//! 从不持有其中的值。

use crate::core::error::BindingResult;

/// 一个布尔选项的声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// 稳定的键名
    pub key: String,
    /// 显示标签，缺省时由键名生成
    pub label: Option<String>,
    /// 类别，缺省时归入 `Uncategorized`
    pub category: Option<String>,
    /// 提示文字
    pub tooltip: Option<String>,
    /// 类别内的显式排序，缺省时使用声明顺序
    pub order: Option<i32>,
    /// 解锁隐藏手势前不显示
    pub hidden: bool,
}

impl OptionSpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            category: None,
            tooltip: None,
            order: None,
            hidden: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// 设置源
///
/// 通常由 [`declare_settings!`](crate::declare_settings) 生成实现。
/// 写入必须幂等：重复写入相同的值除了写入本身之外没有副作用。
pub trait SettingsSource {
    /// 选项元数据表，按声明顺序
    fn options(&self) -> Vec<OptionSpec>;

    /// 读取值；未知或不可读的键返回 `None`
    fn get(&self, key: &str) -> Option<bool>;

    /// 写入值
    fn set(&mut self, key: &str, value: bool) -> BindingResult<()>;
}

impl<S: SettingsSource + ?Sized> SettingsSource for Box<S> {
    fn options(&self) -> Vec<OptionSpec> {
        (**self).options()
    }

    fn get(&self, key: &str) -> Option<bool> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: bool) -> BindingResult<()> {
        (**self).set(key, value)
    }
}
