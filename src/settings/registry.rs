//! 选项注册表
//!
//! 从设置源的元数据表发现所有布尔选项，按类别分组并排序。

use super::source::SettingsSource;
use crate::core::error::DiscoveryError;
use crate::core::utils::nicify_key;
use std::collections::HashSet;

/// 未标注类别的选项归入的类别，总是排在最后
pub const UNCATEGORIZED: &str = "Uncategorized";

/// 一个可切换选项的描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub key: String,
    pub label: String,
    pub category: String,
    pub tooltip: String,
    /// 类别内排序值
    pub order: i32,
    pub hidden: bool,
}

/// 同一类别的选项键，保持发现顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub keys: Vec<String>,
}

impl CategoryGroup {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// 选项注册表
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    descriptors: Vec<OptionDescriptor>,
    categories: Vec<CategoryGroup>,
}

impl OptionRegistry {
    /// 发现设置源中的所有选项
    ///
    /// 设置源缺失时返回空注册表并记录警告。只读，不修改设置源。
    pub fn discover<S: SettingsSource + ?Sized>(source: Option<&S>) -> Self {
        let Some(source) = source else {
            tracing::warn!(target: "settings", "{}, option registry is empty", DiscoveryError::SourceMissing);
            return Self::default();
        };

        // (类别序号, 排序值, 发现序号, 描述)
        let mut ranked: Vec<(usize, i32, usize, OptionDescriptor)> = Vec::new();
        let mut category_order: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, spec) in source.options().into_iter().enumerate() {
            if !seen.insert(spec.key.clone()) {
                tracing::warn!(
                    target: "settings",
                    "{}, keeping the first declaration",
                    DiscoveryError::DuplicateKey { key: spec.key }
                );
                continue;
            }
            if source.get(&spec.key).is_none() {
                tracing::warn!(
                    target: "settings",
                    "{}, skipping",
                    DiscoveryError::Unreadable { key: spec.key }
                );
                continue;
            }

            let category = spec
                .category
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            let category_rank = if category == UNCATEGORIZED {
                usize::MAX
            } else {
                match category_order.iter().position(|name| *name == category) {
                    Some(rank) => rank,
                    None => {
                        category_order.push(category.clone());
                        category_order.len() - 1
                    }
                }
            };

            let order = spec
                .order
                .unwrap_or_else(|| i32::try_from(index).unwrap_or(i32::MAX));
            let descriptor = OptionDescriptor {
                label: spec.label.unwrap_or_else(|| nicify_key(&spec.key)),
                key: spec.key,
                category,
                tooltip: spec.tooltip.unwrap_or_default(),
                order,
                hidden: spec.hidden,
            };
            ranked.push((category_rank, order, index, descriptor));
        }

        ranked.sort_by_key(|(category_rank, order, index, _)| (*category_rank, *order, *index));

        let mut categories: Vec<CategoryGroup> = Vec::new();
        let descriptors: Vec<OptionDescriptor> = ranked
            .into_iter()
            .map(|(_, _, _, descriptor)| descriptor)
            .collect();
        for descriptor in &descriptors {
            match categories.last_mut() {
                Some(group) if group.name == descriptor.category => {
                    group.keys.push(descriptor.key.clone())
                }
                _ => categories.push(CategoryGroup {
                    name: descriptor.category.clone(),
                    keys: vec![descriptor.key.clone()],
                }),
            }
        }

        tracing::debug!(
            target: "settings",
            "Discovered {} options in {} categories",
            descriptors.len(),
            categories.len()
        );

        Self {
            descriptors,
            categories,
        }
    }

    /// 只保留满足条件的描述，重新生成类别（空类别被省略）
    pub fn filtered(&self, keep: impl Fn(&OptionDescriptor) -> bool) -> Self {
        let descriptors: Vec<OptionDescriptor> = self
            .descriptors
            .iter()
            .filter(|&descriptor| keep(descriptor))
            .cloned()
            .collect();
        let categories = self
            .categories
            .iter()
            .filter_map(|group| {
                let keys: Vec<String> = group
                    .keys
                    .iter()
                    .filter(|key| descriptors.iter().any(|d| d.key == **key))
                    .cloned()
                    .collect();
                (!keys.is_empty()).then(|| CategoryGroup {
                    name: group.name.clone(),
                    keys,
                })
            })
            .collect();
        Self {
            descriptors,
            categories,
        }
    }

    /// 按显示顺序排列的所有描述
    pub fn descriptors(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }

    /// 所有非空类别，按显示顺序
    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|group| group.name == name)
    }

    pub fn get(&self, key: &str) -> Option<&OptionDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.key == key)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
