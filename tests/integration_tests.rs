//! Integration tests for the rules engine and the drive loop

use neon_tetris::core::{BagRandomizer, GameState};
use neon_tetris::engine::{DriveConfig, DriveLoop};
use neon_tetris::headless::{run_headless, HeadlessConfig};
use neon_tetris::types::{
    GameEvent, GameMode, GameStatus, GameSummary, InputAction, LastClear, PieceKind,
    RotationDirection, NEXT_QUEUE_LEN,
};

#[test]
fn test_game_lifecycle() {
    let state = GameState::with_seed(GameMode::Endless, 12345);
    assert_eq!(state.status(), GameStatus::Playing);
    assert_eq!(state.next_queue().len(), NEXT_QUEUE_LEN);
    assert_eq!(state.summary(), None);
    assert_eq!(
        state.current_summary(),
        GameSummary {
            mode: GameMode::Endless,
            score: 0,
            lines: 0,
            duration_ms: 0,
        }
    );
}

#[test]
fn test_same_seed_same_game() {
    let a = GameState::with_seed(GameMode::Endless, 77);
    let b = GameState::with_randomizer(GameMode::Endless, BagRandomizer::new(77));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_failed_actions_leave_state_unchanged() {
    let mut state = GameState::with_seed(GameMode::Endless, 3);
    while state.move_piece(-1) {}
    let before = state.snapshot();

    assert!(!state.move_piece(-1));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_hold_scenario() {
    let mut state = GameState::with_seed(GameMode::Endless, 21);
    let first = state.active().kind;
    let next = state.next_queue()[0];

    assert!(state.hold());
    assert_eq!(state.hold_piece(), Some(first));
    assert_eq!(state.active().kind, next);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);

    let before = state.snapshot();
    assert!(!state.hold());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_o_rotation_in_open_space() {
    // Find a seed whose first piece is an O.
    let mut state = (0..200)
        .map(|seed| GameState::with_seed(GameMode::Endless, seed))
        .find(|s| s.active().kind == PieceKind::O)
        .expect("some seed spawns an O first");
    state.soft_drop_step(false);
    state.soft_drop_step(false);
    let origin = (state.active().x, state.active().y);

    for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
        assert!(state.rotate(direction));
        assert_eq!((state.active().x, state.active().y), origin);
    }
}

#[test]
fn test_hard_drops_until_top_out() {
    let mut state = GameState::with_seed(GameMode::Endless, 8);
    let mut drops = 0;
    while state.hard_drop() {
        drops += 1;
        assert!(drops < 1000, "stack never topped out");
    }

    assert!(state.is_over());
    let events = state.take_events();
    let overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver(_)))
        .count();
    assert_eq!(overs, 1);
    // Further input is ignored.
    assert!(!state.move_piece(1));
    assert!(!state.rotate(RotationDirection::Clockwise));
    assert!(!state.hold());
}

#[test]
fn test_time_limit_game_ends_on_clock() {
    let mut state = GameState::with_seed(GameMode::TimeLimit, 2);
    for _ in 0..2400 {
        state.tick(50);
    }
    assert!(state.is_over());
    assert_eq!(state.summary().map(|s| s.duration_ms), Some(120_000));
}

#[test]
fn test_drive_loop_line_clear_event_follows_lock() {
    // Drop pieces until something clears, then check event order.
    let mut game = DriveLoop::with_seed(GameMode::Endless, 11, DriveConfig::default());
    let mut seen = None;

    'outer: for frame in 0..20_000u32 {
        // Alternate walls so the stack spreads across the width.
        let action = match frame % 6 {
            0 => InputAction::RotateCw,
            1 | 2 | 3 if frame % 12 < 6 => InputAction::MoveLeft,
            1 | 2 | 3 => InputAction::MoveRight,
            _ => InputAction::HardDrop,
        };
        game.input_mut().tap(action);
        let events = game.frame(16);
        for (i, event) in events.iter().enumerate() {
            if let GameEvent::LineClear(clear) = event {
                assert!(matches!(
                    events[i - 1],
                    GameEvent::Locked { lines_cleared, .. } if lines_cleared == clear.lines
                ));
                seen = Some(*clear);
                break 'outer;
            }
        }
        if game.state().is_over() {
            break;
        }
    }

    if let Some(clear) = seen {
        assert!(!clear.is_empty());
        // The drive loop consumes the record.
        assert_eq!(game.state().last_clear(), LastClear::default());
    }
}

#[test]
fn test_drive_loop_arr_zero_slides_to_wall() {
    let config = DriveConfig {
        das_ms: 0,
        arr_ms: 0,
        ..DriveConfig::default()
    };
    let mut game = DriveLoop::with_seed(GameMode::Endless, 4, config);
    game.input_mut().press(InputAction::MoveRight);
    game.frame(16);

    let active = game.state().active();
    assert!(!game.state().can_place(&active.shifted(1, 0)));
}

#[test]
fn test_headless_run_line_goal() {
    let config = HeadlessConfig {
        mode: GameMode::LineGoal,
        seed: Some(99),
        frames: 5_000,
        frame_ms: 16,
    };
    let run = run_headless(&config, DriveConfig::default());
    assert_eq!(run.seed, 99);
    assert_eq!(run.summary.mode, GameMode::LineGoal);
    assert!(run.pieces > 0);
    if !run.finished {
        assert_eq!(run.frames, 5_000);
    }
}

#[test]
fn test_summary_and_events_serialize() {
    let summary = GameSummary {
        mode: GameMode::LineGoal,
        score: 1200,
        lines: 40,
        duration_ms: 61_000,
    };
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["mode"], "line_goal");
    assert_eq!(json["lines"], 40);

    let event = GameEvent::LineClear(LastClear::new(4));
    let json = serde_json::to_value(event).unwrap();
    assert_eq!(json["type"], "line_clear");
    assert_eq!(json["tetris"], true);

    let back: GameEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
