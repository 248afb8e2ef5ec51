/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量和运行时校验
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod gesture;
pub mod layout;

pub use gesture::GestureConfig;
pub use layout::LayoutConfig;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 调试面板主配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// 隐藏手势配置
    #[serde(default)]
    pub gesture: GestureConfig,

    /// 面板布局配置
    #[serde(default)]
    pub layout: LayoutConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BoardConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("BOARD_GESTURE_STEP_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.gesture.step_timeout_secs = secs;
            }
        }
        if let Ok(val) = env::var("BOARD_LAYOUT_DISTANCE") {
            if let Ok(distance) = val.parse() {
                self.layout.expanded_distance = distance;
            }
        }
        if let Ok(val) = env::var("BOARD_LAYOUT_TRANSITION_SECONDS") {
            if let Ok(secs) = val.parse() {
                self.layout.transition_seconds = secs;
            }
        }
        if let Ok(val) = env::var("BOARD_LOG_LEVEL") {
            if let Some(level) = LogLevel::parse(&val) {
                self.logging.level = level;
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.gesture.validate()?;
        self.layout.validate()?;
        Ok(())
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./debug_board.toml
    /// 2. ./debug_board.json
    /// 3. <用户配置目录>/debug_board/config.toml
    /// 4. 使用默认配置
    ///
    /// 找到但无法通过校验的文件会被跳过。
    pub fn load_or_default() -> Self {
        let mut candidates: Vec<PathBuf> = vec![
            PathBuf::from("debug_board.toml"),
            PathBuf::from("debug_board.json"),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("debug_board").join("config.toml"));
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            let loaded = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => Self::from_json_file(&path),
                _ => Self::from_toml_file(&path),
            };
            match loaded.and_then(|config| config.validate().map(|_| config)) {
                Ok(config) => {
                    tracing::info!(target: "config", "Loaded config from {:?}", path);
                    return config;
                }
                Err(e) => {
                    tracing::warn!(target: "config", "Ignoring config {:?}: {}", path, e);
                }
            }
        }

        tracing::info!(target: "config", "Using default configuration");
        Self::default()
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别（`RUST_LOG` 未设置时使用）
    pub level: LogLevel,
}

use crate::impl_default;

impl_default!(LoggingConfig {
    level: LogLevel::Info,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// 解析不区分大小写的级别名称
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// `EnvFilter` 指令字符串
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
