//! 无头演示：用脚本化的输入驱动调试面板几秒钟，把事件打印到日志。

use debug_board::config::BoardConfig;
use debug_board::xr::{ControllerState, Hand, Pose, SymbolDecoder};
use debug_board::{declare_settings, BoardCommand, BoardEvent, DebugBoard, FrameInput};
use glam::{Quat, Vec3};

declare_settings! {
    /// 打鸭子游戏的调试开关
    pub struct ArcadeSettings {
        [category = "Ducks", tooltip = "Draw each duck's flight path"]
        show_flight_paths = false,
        [category = "Ducks", tooltip = "Halve duck speed"]
        slow_ducks = false,
        [category = "Ducks", tooltip = "Ducks never flee"]
        stubborn_ducks = true,
        [category = "Gun", tooltip = "Never reload"]
        infinite_ammo = false,
        [category = "Gun", tooltip = "Show the aim ray"]
        laser_sight = true,
        [category = "Secret", tooltip = "Every shot hits", hidden = true]
        golden_gun = false,
        []
        show_fps = false,
    }
}

const FRAME: f32 = 1.0 / 72.0;

fn init_logging(config: &BoardConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.as_directive()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 第 `frame` 帧右手控制器的状态：把解锁序列逐步"按"出来
fn scripted_controller(frame: usize, config: &BoardConfig) -> ControllerState {
    use debug_board::xr::InputSymbol;

    let step = frame / 6;
    let pressed = frame % 6 < 3;
    let mut state = ControllerState::default();
    let Some(symbol) = config.gesture.sequence.get(step) else {
        return state;
    };
    if !pressed {
        return state;
    }
    match symbol {
        InputSymbol::Up => state.thumbstick = [0.0, 1.0],
        InputSymbol::Down => state.thumbstick = [0.0, -1.0],
        InputSymbol::Left => state.thumbstick = [-1.0, 0.0],
        InputSymbol::Right => state.thumbstick = [1.0, 0.0],
        InputSymbol::A => state.buttons.a = true,
        InputSymbol::B => state.buttons.b = true,
        InputSymbol::X => state.buttons.x = true,
        InputSymbol::Y => state.buttons.y = true,
        InputSymbol::Menu => state.buttons.menu = true,
        InputSymbol::Trigger => state.trigger = 1.0,
        InputSymbol::Grip => state.squeeze = 1.0,
    }
    state
}

fn main() {
    let mut config = BoardConfig::load_or_default();
    config.apply_env_overrides();
    init_logging(&config);
    if let Err(e) = config.validate() {
        tracing::error!(target: "board", "Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut board = DebugBoard::new(ArcadeSettings::default(), &config);
    board.set_board_pose(Pose::new(Vec3::new(0.0, 1.2, -1.0), Quat::IDENTITY));
    let settings_panel = board.add_panel();
    let stats_panel = board.add_panel();

    for category in board.visible_registry().categories() {
        tracing::info!(target: "board", "[{}] {}", category.name, category.keys.join(", "));
    }

    let mut decoder = SymbolDecoder::new(config.gesture.thumbstick_deadzone);
    let mut viewpoint = Pose::new(Vec3::new(0.0, 1.7, 0.0), Quat::IDENTITY);

    for frame in 0..240 {
        viewpoint.orientation = Quat::from_rotation_y(frame as f32 * 0.002);

        let mut commands = Vec::new();
        match frame {
            10 => commands.push(BoardCommand::Focus(settings_panel)),
            20 => commands.push(BoardCommand::Toggle("show_flight_paths".into())),
            30 => commands.push(BoardCommand::ToggleCategory("Ducks".into())),
            90 => commands.push(BoardCommand::Focus(stats_panel)),
            200 => commands.push(BoardCommand::Toggle("golden_gun".into())),
            _ => {}
        }
        if frame == 60 {
            // 游戏逻辑直接改写设置，面板下一帧同步
            board.settings_mut().infinite_ammo = true;
        }

        let input = FrameInput {
            viewpoint,
            symbols: decoder.decode(Hand::Right, &scripted_controller(frame, &config)),
            commands,
        };

        for event in board.tick(FRAME, &input) {
            match event {
                BoardEvent::Unlocked => {
                    tracing::info!(target: "board", "Frame {}: secret options unlocked", frame)
                }
                other => tracing::info!(target: "board", "Frame {}: {:?}", frame, other),
            }
        }
    }

    if let Some(pose) = board.focus().placement(stats_panel) {
        tracing::info!(target: "board", "Stats panel rests at {:?}", pose.position);
    }
    println!("{}", board.errors().summary().format());
}
