use anyhow::Result;
use debug_board::config::{BoardConfig, GestureConfig, LayoutConfig};
use debug_board::settings::SettingsSource;
use debug_board::ui::FocusState;
use debug_board::xr::{ControllerState, Hand, InputSymbol, Pose, SymbolDecoder};
use debug_board::{declare_settings, BoardCommand, BoardEvent, DebugBoard, FrameInput};
use glam::{Quat, Vec3};

declare_settings! {
    struct DuckHunt {
        [category = "Ducks", tooltip = "Draw each duck's flight path"]
        show_flight_paths = true,
        [category = "Ducks"]
        slow_ducks = true,
        [category = "Ducks"]
        stubborn_ducks = false,
        [category = "Gun"]
        infinite_ammo = false,
        [category = "Gun"]
        laser_sight = true,
        [category = "Secret", hidden = true]
        golden_gun = false,
        []
        show_fps = false,
    }
}

const DT: f32 = 1.0 / 72.0;

fn instant_config() -> BoardConfig {
    BoardConfig {
        layout: LayoutConfig {
            transition_seconds: 0.0,
            ..LayoutConfig::default()
        },
        ..BoardConfig::default()
    }
}

fn run(board: &mut DebugBoard<DuckHunt>, commands: Vec<BoardCommand>) -> Vec<BoardEvent> {
    board.tick(
        DT,
        &FrameInput {
            commands,
            ..FrameInput::default()
        },
    )
}

fn press(symbol: InputSymbol) -> ControllerState {
    let mut state = ControllerState::default();
    match symbol {
        InputSymbol::Up => state.thumbstick = [0.0, 1.0],
        InputSymbol::Down => state.thumbstick = [0.0, -1.0],
        InputSymbol::Left => state.thumbstick = [-1.0, 0.0],
        InputSymbol::Right => state.thumbstick = [1.0, 0.0],
        InputSymbol::A => state.buttons.a = true,
        InputSymbol::B => state.buttons.b = true,
        _ => unreachable!("not used by the default sequence"),
    }
    state
}

#[test]
fn test_registry_layout_matches_declaration() {
    let board = DebugBoard::new(DuckHunt::default(), &instant_config());
    let names: Vec<&str> = board
        .visible_registry()
        .categories()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ducks", "Gun", "Uncategorized"]);
    assert_eq!(board.visible_options().len(), 6);
    assert_eq!(board.registry().len(), 7);

    let paths = board.registry().get("show_flight_paths").unwrap();
    assert_eq!(paths.label, "Show Flight Paths");
    assert_eq!(paths.tooltip, "Draw each duck's flight path");
}

#[test]
fn test_bindings_reflect_current_values() {
    let board = DebugBoard::new(DuckHunt::default(), &instant_config());
    for binding in board.bindings() {
        let value = board.settings().get(binding.key()).unwrap();
        assert_eq!(binding.rendered(), value, "{}", binding.key());
    }
}

#[test]
fn test_category_toggle_majority_rule() {
    let mut board = DebugBoard::new(DuckHunt::default(), &instant_config());

    // Ducks: [T, T, F] -> 全关
    run(&mut board, vec![BoardCommand::ToggleCategory("Ducks".into())]);
    let s = board.settings();
    assert!(!s.show_flight_paths && !s.slow_ducks && !s.stubborn_ducks);

    // [F, F, F] -> 全开
    run(&mut board, vec![BoardCommand::ToggleCategory("Ducks".into())]);
    let s = board.settings();
    assert!(s.show_flight_paths && s.slow_ducks && s.stubborn_ducks);

    // Gun: [F, T] 平局 -> 全关
    run(&mut board, vec![BoardCommand::ToggleCategory("Gun".into())]);
    assert!(!board.settings().infinite_ammo);
    assert!(!board.settings().laser_sight);

    // 其他类别不受影响
    assert!(!board.settings().show_fps);
}

#[test]
fn test_category_toggle_reports_only_real_changes() {
    let mut board = DebugBoard::new(DuckHunt::default(), &instant_config());
    board.settings_mut().infinite_ammo = true;
    board.settings_mut().laser_sight = false;
    run(&mut board, Vec::new());

    // Gun: [T, F] 平局 -> 全关，laser_sight 没有变化
    let events = run(&mut board, vec![BoardCommand::ToggleCategory("Gun".into())]);
    assert_eq!(
        events,
        vec![
            BoardEvent::ToggleChanged {
                key: "infinite_ammo".into(),
                value: false
            },
            BoardEvent::CategoryToggled {
                category: "Gun".into(),
                target: false,
                failed: 0
            },
        ]
    );
}

#[test]
fn test_external_write_is_picked_up_next_frame() {
    let mut board = DebugBoard::new(DuckHunt::default(), &instant_config());
    board.settings_mut().infinite_ammo = true;
    assert!(!board.binding("infinite_ammo").unwrap().rendered());

    let events = run(&mut board, Vec::new());
    assert_eq!(
        events,
        vec![BoardEvent::ToggleChanged {
            key: "infinite_ammo".into(),
            value: true
        }]
    );
    assert!(board.binding("infinite_ammo").unwrap().rendered());
}

#[test]
fn test_controller_sequence_unlocks_hidden_options() -> Result<()> {
    let config = instant_config();
    let mut board = DebugBoard::new(DuckHunt::default(), &config);
    let mut decoder = SymbolDecoder::new(config.gesture.thumbstick_deadzone);
    let mut unlocked = 0;

    for symbol in config.gesture.sequence.clone() {
        for state in [press(symbol), ControllerState::default()] {
            let input = FrameInput {
                symbols: decoder.decode(Hand::Left, &state),
                ..FrameInput::default()
            };
            let events = board.tick(DT, &input);
            unlocked += events.iter().filter(|e| **e == BoardEvent::Unlocked).count();
        }
    }

    assert_eq!(unlocked, 1);
    assert!(board.is_unlocked());
    assert!(board.visible_registry().category("Secret").is_some());

    run(&mut board, vec![BoardCommand::Toggle("golden_gun".into())]);
    assert!(board.settings().golden_gun);
    assert_eq!(board.errors().summary().total_errors, 0);
    Ok(())
}

#[test]
fn test_slow_gesture_does_not_unlock() {
    let config = BoardConfig {
        gesture: GestureConfig {
            sequence: vec![InputSymbol::Up, InputSymbol::Down],
            step_timeout_secs: 0.5,
            ..GestureConfig::default()
        },
        ..instant_config()
    };
    let mut board = DebugBoard::new(DuckHunt::default(), &config);

    let up = FrameInput {
        symbols: vec![InputSymbol::Up],
        ..FrameInput::default()
    };
    let down = FrameInput {
        symbols: vec![InputSymbol::Down],
        ..FrameInput::default()
    };
    board.tick(DT, &up);
    board.tick(0.6, &FrameInput::default());
    board.tick(DT, &down);
    assert!(!board.is_unlocked());

    board.tick(DT, &up);
    let events = board.tick(DT, &down);
    assert_eq!(events, vec![BoardEvent::Unlocked]);
}

#[test]
fn test_single_focused_panel() {
    let mut board = DebugBoard::new(DuckHunt::default(), &instant_config());
    let p1 = board.add_panel();
    let p2 = board.add_panel();

    run(
        &mut board,
        vec![BoardCommand::Focus(p1), BoardCommand::TransitionFinished(p1)],
    );
    assert_eq!(board.focus().state(p1), Some(FocusState::Expanded));

    let events = run(&mut board, vec![BoardCommand::Focus(p2)]);
    assert!(events.contains(&BoardEvent::FocusChanged {
        panel: p1,
        state: FocusState::Collapsing
    }));
    assert!(events.contains(&BoardEvent::FocusChanged {
        panel: p2,
        state: FocusState::Expanding
    }));
    let focused = board
        .focus()
        .panels()
        .iter()
        .filter(|p| p.state.is_focused())
        .count();
    assert_eq!(focused, 1);

    // 迟到的完成通知不报错
    run(
        &mut board,
        vec![
            BoardCommand::TransitionFinished(p1),
            BoardCommand::TransitionFinished(p1),
        ],
    );
    assert_eq!(board.focus().state(p1), Some(FocusState::Compact));
    assert_eq!(board.errors().summary().total_errors, 0);
}

#[test]
fn test_expanded_panel_follows_viewpoint() {
    let config = BoardConfig {
        layout: LayoutConfig {
            transition_seconds: 0.1,
            ..LayoutConfig::default()
        },
        ..BoardConfig::default()
    };
    let mut board = DebugBoard::new(DuckHunt::default(), &config);
    board.set_board_pose(Pose::new(Vec3::new(0.0, 1.0, -2.0), Quat::IDENTITY));
    let panel = board.add_panel();

    run(&mut board, vec![BoardCommand::Focus(panel)]);
    // 自动完成过渡
    for _ in 0..10 {
        run(&mut board, Vec::new());
    }
    assert_eq!(board.focus().state(panel), Some(FocusState::Expanded));

    let viewpoint = Pose::new(
        Vec3::new(1.0, 1.6, 0.0),
        Quat::from_rotation_y(std::f32::consts::PI),
    );
    board.tick(
        DT,
        &FrameInput {
            viewpoint,
            ..FrameInput::default()
        },
    );
    let pose = board.focus().placement(panel).unwrap();
    let expected = Vec3::new(
        1.0,
        1.6 + config.layout.expanded_height_offset,
        config.layout.expanded_distance,
    );
    assert!((pose.position - expected).length() < 1e-4);
}
