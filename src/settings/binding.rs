//! 开关绑定
//!
//! 把一个描述与设置源中的值双向绑定。绑定只镜像值，不拥有值：
//! 用户激活通过访问器写入，外部修改在下一次同步时反映到视觉状态。

use super::registry::OptionDescriptor;
use super::source::SettingsSource;
use crate::core::error::{BindingError, BindingResult};

/// 单个值的访问器
pub trait ValueAccessor {
    fn get(&self) -> BindingResult<bool>;
    fn set(&mut self, value: bool) -> BindingResult<()>;
}

/// 通过键访问设置源中的一个值
pub struct SourceAccessor<'a, S: SettingsSource + ?Sized> {
    source: &'a mut S,
    key: &'a str,
}

impl<'a, S: SettingsSource + ?Sized> SourceAccessor<'a, S> {
    pub fn new(source: &'a mut S, key: &'a str) -> Self {
        Self { source, key }
    }
}

impl<S: SettingsSource + ?Sized> ValueAccessor for SourceAccessor<'_, S> {
    fn get(&self) -> BindingResult<bool> {
        self.source
            .get(self.key)
            .ok_or_else(|| BindingError::UnknownOption(self.key.to_string()))
    }

    fn set(&mut self, value: bool) -> BindingResult<()> {
        self.source.set(self.key, value)
    }
}

/// 两态开关的视觉状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleVisual {
    On,
    Off,
}

impl From<bool> for ToggleVisual {
    fn from(value: bool) -> Self {
        if value {
            ToggleVisual::On
        } else {
            ToggleVisual::Off
        }
    }
}

/// 绑定的运行时状态
///
/// 每次同步之后 `last_rendered == current`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBindingState {
    pub current: bool,
    pub last_rendered: bool,
}

/// 开关绑定
#[derive(Debug, Clone)]
pub struct ToggleBinding {
    descriptor: OptionDescriptor,
    state: ToggleBindingState,
}

impl ToggleBinding {
    /// 绑定描述与访问器，并渲染初始值
    pub fn bind<A: ValueAccessor + ?Sized>(descriptor: OptionDescriptor, accessor: &A) -> Self {
        let value = match accessor.get() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(target: "settings", "Binding {} starts off: {}", descriptor.key, e);
                false
            }
        };
        Self {
            descriptor,
            state: ToggleBindingState {
                current: value,
                last_rendered: value,
            },
        }
    }

    /// 用户激活：写入相反值，确认后再渲染
    ///
    /// 写入失败或没有生效时视觉保持激活前的值并返回错误。
    pub fn activate<A: ValueAccessor + ?Sized>(&mut self, accessor: &mut A) -> BindingResult<bool> {
        let before = match accessor.get() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(target: "settings", "Failed to read {}: {}", self.descriptor.key, e);
                return Err(e);
            }
        };
        self.apply(accessor, !before)
    }

    /// 写入指定值，确认后再渲染
    pub fn apply<A: ValueAccessor + ?Sized>(
        &mut self,
        accessor: &mut A,
        value: bool,
    ) -> BindingResult<bool> {
        if let Err(e) = accessor.set(value) {
            tracing::error!(target: "settings", "Failed to set {}: {}", self.descriptor.key, e);
            return Err(e);
        }

        let after = match accessor.get() {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(target: "settings", "Failed to re-read {} after write: {}", self.descriptor.key, e);
                return Err(e);
            }
        };
        self.render(after);
        if after != value {
            let err = BindingError::WriteNotApplied {
                key: self.descriptor.key.clone(),
            };
            tracing::error!(target: "settings", "{}", err);
            return Err(err);
        }
        Ok(after)
    }

    /// 同步外部修改
    ///
    /// 值与上次渲染不同时更新视觉，返回新值。
    pub fn sync<A: ValueAccessor + ?Sized>(&mut self, accessor: &A) -> Option<bool> {
        match accessor.get() {
            Ok(value) => {
                self.state.current = value;
                if value != self.state.last_rendered {
                    self.state.last_rendered = value;
                    tracing::trace!(target: "settings", "{} changed externally to {}", self.descriptor.key, value);
                    Some(value)
                } else {
                    None
                }
            }
            Err(e) => {
                tracing::debug!(target: "settings", "Skipping sync of {}: {}", self.descriptor.key, e);
                None
            }
        }
    }

    fn render(&mut self, value: bool) {
        self.state.current = value;
        self.state.last_rendered = value;
    }

    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub fn key(&self) -> &str {
        &self.descriptor.key
    }

    pub fn state(&self) -> ToggleBindingState {
        self.state
    }

    /// 当前渲染的值
    pub fn rendered(&self) -> bool {
        self.state.last_rendered
    }

    pub fn visual(&self) -> ToggleVisual {
        self.state.last_rendered.into()
    }
}
