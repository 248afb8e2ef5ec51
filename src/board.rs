//! 调试面板驱动器
//!
//! 持有唯一的设置实例，并在每一帧按固定顺序推进所有组件：
//! 1. 开关同步（先看到外部修改）
//! 2. 手势超时检查与输入符号
//! 3. 用户操作
//! 4. 面板过渡与摆放

use crate::config::BoardConfig;
use crate::core::error::{BindingError, BoardError};
use crate::core::error_aggregator::ErrorAggregator;
use crate::events::{BoardCommand, BoardEvent};
use crate::settings::{
    CategoryAggregator, OptionDescriptor, OptionRegistry, SettingsSource, SourceAccessor,
    ToggleBinding,
};
use crate::ui::{FocusBoard, PanelId};
use crate::xr::{GestureProgress, GestureRecognizer, InputSymbol, Pose};

/// 一帧的输入
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// 视点姿态
    pub viewpoint: Pose,
    /// 本帧的离散输入符号，按发生顺序
    pub symbols: Vec<InputSymbol>,
    /// 本帧的用户操作，按发生顺序
    pub commands: Vec<BoardCommand>,
}

/// 调试面板
pub struct DebugBoard<S: SettingsSource> {
    settings: S,
    /// 所有已发现的选项（含隐藏项）
    registry: OptionRegistry,
    /// 当前可见的选项
    visible: OptionRegistry,
    bindings: Vec<ToggleBinding>,
    gesture: GestureRecognizer,
    focus: FocusBoard,
    errors: ErrorAggregator,
}

impl<S: SettingsSource> DebugBoard<S> {
    /// 创建面板并发现设置源中的选项
    pub fn new(settings: S, config: &BoardConfig) -> Self {
        let mut board = Self {
            settings,
            registry: OptionRegistry::default(),
            visible: OptionRegistry::default(),
            bindings: Vec::new(),
            gesture: GestureRecognizer::from_config(&config.gesture),
            focus: FocusBoard::new(config.layout.clone()),
            errors: ErrorAggregator::new(),
        };
        board.rediscover();
        board
    }

    /// 重新发现选项并重建所有绑定
    pub fn rediscover(&mut self) {
        self.registry = OptionRegistry::discover(Some(&self.settings));
        let settings = &mut self.settings;
        self.bindings = self
            .registry
            .descriptors()
            .iter()
            .map(|descriptor| {
                let accessor = SourceAccessor::new(&mut *settings, &descriptor.key);
                ToggleBinding::bind(descriptor.clone(), &accessor)
            })
            .collect();
        self.refresh_visible();
        tracing::info!(
            target: "board",
            "Board ready with {} options ({} visible)",
            self.registry.len(),
            self.visible.len()
        );
    }

    /// 推进一帧
    pub fn tick(&mut self, delta_time: f32, input: &FrameInput) -> Vec<BoardEvent> {
        let mut events = Vec::new();

        self.sync_bindings(&mut events);

        self.gesture.tick(delta_time);
        for symbol in &input.symbols {
            self.gesture.feed(*symbol);
        }
        if self.gesture.take_unlock() {
            self.refresh_visible();
            events.push(BoardEvent::Unlocked);
        }

        for command in &input.commands {
            self.execute(command, &mut events);
        }

        self.focus.tick(delta_time, &input.viewpoint);
        events.extend(
            self.focus
                .drain_changes()
                .into_iter()
                .map(|change| BoardEvent::FocusChanged {
                    panel: change.panel,
                    state: change.state,
                }),
        );

        events
    }

    fn sync_bindings(&mut self, events: &mut Vec<BoardEvent>) {
        let settings = &mut self.settings;
        for binding in &mut self.bindings {
            let key = binding.key().to_string();
            let accessor = SourceAccessor::new(&mut *settings, &key);
            let Some(value) = binding.sync(&accessor) else {
                continue;
            };
            if self.visible.get(&key).is_some() {
                events.push(BoardEvent::ToggleChanged { key, value });
            }
        }
    }

    fn execute(&mut self, command: &BoardCommand, events: &mut Vec<BoardEvent>) {
        match command {
            BoardCommand::Toggle(key) => self.toggle(key, events),
            BoardCommand::ToggleCategory(category) => self.toggle_category(category, events),
            BoardCommand::Focus(panel) => {
                if let Err(e) = self.focus.request_focus(*panel) {
                    tracing::warn!(target: "focus", "{}", e);
                    self.errors.record_error(&e.into(), "focus");
                }
            }
            BoardCommand::Unfocus(panel) => {
                if let Err(e) = self.focus.request_unfocus(*panel) {
                    tracing::warn!(target: "focus", "{}", e);
                    self.errors.record_error(&e.into(), "focus");
                }
            }
            BoardCommand::TransitionFinished(panel) => {
                if let Err(e) = self.focus.finish_transition(*panel) {
                    tracing::warn!(target: "focus", "{}", e);
                    self.errors.record_error(&e.into(), "focus");
                }
            }
        }
    }

    fn toggle(&mut self, key: &str, events: &mut Vec<BoardEvent>) {
        if self.visible.get(key).is_none() {
            let err = BoardError::from(BindingError::UnknownOption(key.to_string()));
            tracing::warn!(target: "board", "Ignoring toggle: {}", err);
            self.errors.record_error(&err, key);
            return;
        }
        let Some(binding) = self.bindings.iter_mut().find(|binding| binding.key() == key) else {
            return;
        };

        let mut accessor = SourceAccessor::new(&mut self.settings, key);
        match binding.activate(&mut accessor) {
            Ok(value) => events.push(BoardEvent::ToggleChanged {
                key: key.to_string(),
                value,
            }),
            Err(e) => {
                tracing::warn!(target: "board", "Toggle of {} failed: {}", key, e);
                self.errors.record_error(&e.into(), key);
            }
        }
    }

    fn toggle_category(&mut self, category: &str, events: &mut Vec<BoardEvent>) {
        let Some(report) = CategoryAggregator::toggle_all(
            &self.visible,
            &mut self.bindings,
            &mut self.settings,
            category,
        ) else {
            self.errors.record_error(
                &BoardError::General(format!("Unknown category: {}", category)),
                category,
            );
            return;
        };

        for key in &report.changed {
            events.push(BoardEvent::ToggleChanged {
                key: key.clone(),
                value: report.target,
            });
        }
        for (key, error) in &report.failures {
            self.errors.record_error(&error.clone().into(), key.as_str());
        }
        events.push(BoardEvent::CategoryToggled {
            category: report.category.clone(),
            target: report.target,
            failed: report.failures.len(),
        });
    }

    fn refresh_visible(&mut self) {
        let unlocked = self.gesture.is_unlocked();
        self.visible = self.registry.filtered(|descriptor| unlocked || !descriptor.hidden);
    }

    /// 添加一个面板
    pub fn add_panel(&mut self) -> PanelId {
        self.focus.add_panel()
    }

    /// 设置面板架姿态
    pub fn set_board_pose(&mut self, pose: Pose) {
        self.focus.set_board_pose(pose);
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// 直接修改设置（模拟面板之外的写入者），下一帧同步
    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// 当前可见的选项，按显示顺序
    pub fn visible_options(&self) -> &[OptionDescriptor] {
        self.visible.descriptors()
    }

    pub fn visible_registry(&self) -> &OptionRegistry {
        &self.visible
    }

    pub fn binding(&self, key: &str) -> Option<&ToggleBinding> {
        self.bindings.iter().find(|binding| binding.key() == key)
    }

    pub fn bindings(&self) -> &[ToggleBinding] {
        &self.bindings
    }

    /// 类别的多数状态
    pub fn majority_state(&self, category: &str) -> Option<bool> {
        CategoryAggregator::majority_state(&self.visible, &self.bindings, category)
    }

    pub fn is_unlocked(&self) -> bool {
        self.gesture.is_unlocked()
    }

    pub fn gesture_progress(&self) -> GestureProgress {
        self.gesture.progress()
    }

    pub fn focus(&self) -> &FocusBoard {
        &self.focus
    }

    pub fn errors(&self) -> &ErrorAggregator {
        &self.errors
    }
}
