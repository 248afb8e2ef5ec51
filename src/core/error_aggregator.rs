//! 错误聚合和报告模块
//!
//! 面板里所有可恢复的失败（写入被拒绝、批量切换的部分失败、无效的焦点请求）
//! 都不会向上抛出，而是在这里按类型和来源计数，便于调试面板自己展示。

use crate::core::error::BoardError;
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// 错误统计信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorStats {
    /// 错误总数
    pub total_count: u64,
    /// 按错误类型分组的计数
    pub by_type: HashMap<String, u64>,
    /// 按错误来源分组的计数
    pub by_source: HashMap<String, u64>,
    /// 最近发生的错误（最多保留N条）
    pub recent_errors: VecDeque<ErrorRecord>,
}

impl ErrorStats {
    /// 获取最常见的错误类型
    pub fn most_common_error_type(&self) -> Option<(&String, &u64)> {
        self.by_type.iter().max_by_key(|(_, count)| *count)
    }

    /// 获取最常见的错误来源
    pub fn most_common_error_source(&self) -> Option<(&String, &u64)> {
        self.by_source.iter().max_by_key(|(_, count)| *count)
    }
}

/// 错误记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// 错误类型
    pub error_type: String,
    /// 错误来源（选项键、类别名或面板）
    pub source: String,
    /// 错误消息
    pub message: String,
    /// 时间戳（毫秒）
    pub timestamp_ms: u64,
}

impl ErrorRecord {
    pub fn new(
        error_type: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error_type: error_type.into(),
            source: source.into(),
            message: message.into(),
            timestamp_ms: crate::core::utils::current_timestamp_ms(),
        }
    }
}

/// 错误聚合器
///
/// 单线程使用，由面板驱动器持有。
#[derive(Debug)]
pub struct ErrorAggregator {
    stats: ErrorStats,
    /// 最大保留的错误记录数
    max_recent_errors: usize,
}

impl_default!(ErrorAggregator {
    stats: ErrorStats::default(),
    max_recent_errors: 64,
});

impl ErrorAggregator {
    /// 创建新的错误聚合器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带容量上限的错误聚合器
    pub fn with_capacity(max_recent_errors: usize) -> Self {
        Self {
            stats: ErrorStats::default(),
            max_recent_errors: max_recent_errors.max(1),
        }
    }

    /// 记录错误
    pub fn record_error(&mut self, error: &BoardError, source: impl Into<String>) {
        self.push(ErrorRecord::new(error.type_name(), source, error.to_string()));
    }

    fn push(&mut self, record: ErrorRecord) {
        let stats = &mut self.stats;
        stats.total_count += 1;
        *stats.by_type.entry(record.error_type.clone()).or_insert(0) += 1;
        *stats.by_source.entry(record.source.clone()).or_insert(0) += 1;

        stats.recent_errors.push_back(record);
        while stats.recent_errors.len() > self.max_recent_errors {
            stats.recent_errors.pop_front();
        }
    }

    /// 获取错误统计
    pub fn stats(&self) -> &ErrorStats {
        &self.stats
    }

    /// 获取错误摘要
    pub fn summary(&self) -> ErrorSummary {
        let stats = &self.stats;
        ErrorSummary {
            total_errors: stats.total_count,
            most_common_type: stats.most_common_error_type().map(|(t, c)| (t.clone(), *c)),
            most_common_source: stats
                .most_common_error_source()
                .map(|(s, c)| (s.clone(), *c)),
            recent_error_count: stats.recent_errors.len(),
        }
    }

    /// 清除所有统计
    pub fn clear(&mut self) {
        self.stats = ErrorStats::default();
    }

    /// 导出错误报告（JSON格式）
    pub fn export_report(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.stats)
    }
}

/// 错误摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub total_errors: u64,
    pub most_common_type: Option<(String, u64)>,
    pub most_common_source: Option<(String, u64)>,
    pub recent_error_count: usize,
}

impl ErrorSummary {
    /// 格式化为面板可显示的多行文本
    pub fn format(&self) -> String {
        let mut lines = vec![format!("Errors: {}", self.total_errors)];

        if let Some((ref error_type, count)) = self.most_common_type {
            lines.push(format!("Most common type: {} ({}x)", error_type, count));
        }

        if let Some((ref source, count)) = self.most_common_source {
            lines.push(format!("Most common source: {} ({}x)", source, count));
        }

        lines.push(format!("Recent: {}", self.recent_error_count));
        lines.join("\n")
    }
}
