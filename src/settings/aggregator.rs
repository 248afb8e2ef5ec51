//! 类别聚合
//!
//! 一个类别一键全开/全关：目标值取多数状态的反面，平局时全部关闭。
//! 每个成员单独写入，某个成员失败不影响其余成员。

use super::binding::{SourceAccessor, ToggleBinding};
use super::registry::OptionRegistry;
use super::source::SettingsSource;
use crate::core::error::BindingError;

/// 批量切换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    pub category: String,
    /// 写入的目标值
    pub target: bool,
    /// 成功写入的选项键
    pub applied: Vec<String>,
    /// 渲染值真正翻转的选项键（已经是目标值的成员不在其中）
    pub changed: Vec<String>,
    /// 写入失败的选项键和原因
    pub failures: Vec<(String, BindingError)>,
}

impl AggregationReport {
    /// 所有成员都成功
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 多数是否为开启
///
/// `on_count * 2 >= total` 时视为多数开启，平局算作开启（于是全部关闭）。
pub fn majority_on(on_count: usize, total: usize) -> bool {
    on_count * 2 >= total
}

/// 类别聚合器
pub struct CategoryAggregator;

impl CategoryAggregator {
    /// 类别的多数状态
    ///
    /// 类别不存在时返回 `None`。
    pub fn majority_state(
        registry: &OptionRegistry,
        bindings: &[ToggleBinding],
        category: &str,
    ) -> Option<bool> {
        let group = registry.category(category)?;
        let on_count = Self::members(bindings, &group.keys)
            .filter(|binding| binding.rendered())
            .count();
        Some(majority_on(on_count, group.len()))
    }

    /// 把类别中所有成员切换到多数状态的反面
    ///
    /// 类别不存在时返回 `None`。
    pub fn toggle_all<S: SettingsSource + ?Sized>(
        registry: &OptionRegistry,
        bindings: &mut [ToggleBinding],
        source: &mut S,
        category: &str,
    ) -> Option<AggregationReport> {
        let Some(group) = registry.category(category) else {
            tracing::warn!(target: "settings", "Toggle-all on unknown category {}", category);
            return None;
        };

        let on_count = group
            .keys
            .iter()
            .filter(|key| source.get(key).unwrap_or(false))
            .count();
        let target = !majority_on(on_count, group.len());

        let mut report = AggregationReport {
            category: group.name.clone(),
            target,
            applied: Vec::new(),
            changed: Vec::new(),
            failures: Vec::new(),
        };

        for key in &group.keys {
            let Some(binding) = bindings.iter_mut().find(|binding| binding.key() == key) else {
                report
                    .failures
                    .push((key.clone(), BindingError::UnknownOption(key.clone())));
                continue;
            };
            let before = binding.rendered();
            let mut accessor = SourceAccessor::new(&mut *source, key);
            match binding.apply(&mut accessor, target) {
                Ok(_) => report.applied.push(key.clone()),
                Err(e) => report.failures.push((key.clone(), e)),
            }
            if binding.rendered() != before {
                report.changed.push(key.clone());
            }
        }

        if report.is_complete() {
            tracing::debug!(
                target: "settings",
                "Set all {} options in {} to {}",
                report.applied.len(),
                report.category,
                target
            );
        } else {
            tracing::warn!(
                target: "settings",
                "Toggle-all on {} applied {} of {} options",
                report.category,
                report.applied.len(),
                group.len()
            );
        }

        Some(report)
    }

    fn members<'a>(
        bindings: &'a [ToggleBinding],
        keys: &'a [String],
    ) -> impl Iterator<Item = &'a ToggleBinding> + 'a {
        bindings
            .iter()
            .filter(move |binding| keys.iter().any(|key| key == binding.key()))
    }
}
