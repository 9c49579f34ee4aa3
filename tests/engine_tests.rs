//! Scripted games through the public engine API.
//!
//! Dice are supplied with `apply_roll` so every scenario is exact.

use ludo_engine::{
    Advance, Capture, EngineError, GameEvent, LudoConfig, LudoEngine, Phase, PlayerId, Position,
    StateError,
};

const P1: PlayerId = PlayerId::new(0);
const P2: PlayerId = PlayerId::new(1);
const P3: PlayerId = PlayerId::new(2);
const P4: PlayerId = PlayerId::new(3);

fn engine() -> LudoEngine {
    LudoEngine::with_seed(1)
}

/// Roll, then move `piece` with the roll.
fn roll_and_move(engine: &mut LudoEngine, roll: u8, piece: usize) {
    let outcome = engine.apply_roll(roll).unwrap();
    assert!(outcome.legal_moves.contains(&piece), "piece {} not movable with {}", piece, roll);
    engine.apply_move(piece).unwrap();
}

/// Roll a value nobody can use and check the turn passes.
fn pass_turn(engine: &mut LudoEngine, roll: u8) {
    let outcome = engine.apply_roll(roll).unwrap();
    assert!(outcome.turn_passed);
}

// =============================================================================
// Rolling
// =============================================================================

#[test]
fn test_three_sixes_in_a_row_forfeit() {
    let mut engine = engine();

    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 6, 0);
    let outcome = engine.apply_roll(6).unwrap();

    assert!(outcome.turn_forfeited);
    assert_eq!(engine.current_player(), P2);
    assert_eq!(engine.phase(), Phase::AwaitingRoll);

    let view = engine.snapshot();
    assert_eq!(view.player(P1).consecutive_sixes, 0);
    assert!(view
        .log
        .iter()
        .any(|e| e.event == GameEvent::ThreeSixes { player: P1 }));
}

#[test]
fn test_turn_order_wraps_around_table() {
    let mut engine = engine();
    let mut seen = Vec::new();

    for _ in 0..5 {
        seen.push(engine.current_player());
        pass_turn(&mut engine, 2);
    }

    assert_eq!(seen, vec![P1, P2, P3, P4, P1]);
    assert_eq!(engine.snapshot().turn_number, 6);
}

#[test]
fn test_roll_dice_stays_in_range() {
    let mut engine = LudoEngine::with_seed(99);

    for _ in 0..200 {
        let outcome = engine.roll_dice().unwrap();
        assert!((1..=6).contains(&outcome.roll));
        if let Some(&piece) = outcome.legal_moves.first() {
            engine.apply_move(piece).unwrap();
        }
        if engine.is_game_over() {
            break;
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_api_misuse_is_reported() {
    let mut engine = engine();

    assert_eq!(
        engine.apply_move(0),
        Err(EngineError::InvalidState(StateError::NoRollPending))
    );

    engine.apply_roll(6).unwrap();
    assert_eq!(
        engine.roll_dice(),
        Err(EngineError::InvalidState(StateError::RollPending(6)))
    );
    assert_eq!(engine.apply_move(4), Err(EngineError::InvalidMove { piece: 4, roll: 6 }));

    // Misuse leaves the pending roll in place.
    assert_eq!(engine.phase(), Phase::AwaitingMove(6));
    assert!(engine.apply_move(1).is_ok());
}

#[test]
fn test_error_display() {
    let err = EngineError::InvalidState(StateError::GameOver);
    assert_eq!(err.to_string(), "invalid state: the game is over");
}

// =============================================================================
// Movement and captures
// =============================================================================

#[test]
fn test_green_captures_red() {
    let mut engine = engine();

    // Red: out, 1 -> 7 -> 12.
    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 5, 0);
    assert_eq!(engine.current_player(), P2);

    pass_turn(&mut engine, 1);
    pass_turn(&mut engine, 1);
    pass_turn(&mut engine, 1);

    // Red: 12 -> 17.
    roll_and_move(&mut engine, 5, 0);
    assert_eq!(engine.snapshot().player(P1).pieces[0], Position::OnTrack(17));

    // Green: out on 14, then 14 -> 17.
    roll_and_move(&mut engine, 6, 0);
    engine.apply_roll(3).unwrap();
    let outcome = engine.apply_move(0).unwrap();

    assert_eq!(outcome.advance, Advance::MovesOnTrack(17));
    assert_eq!(outcome.captured.as_slice(), &[Capture { player: P1, piece: 0 }]);
    assert_eq!(engine.current_player(), P3);

    let view = engine.snapshot();
    assert_eq!(view.player(P1).pieces[0], Position::InBase);
    assert_eq!(view.player(P2).pieces[0], Position::OnTrack(17));
    assert_eq!(
        view.log_lines().last().unwrap(),
        "Player 2's Green piece 1 landed on Player 1's Red piece 1, sending it back to base!"
    );
}

#[test]
fn test_captured_piece_needs_six_again() {
    let mut engine = engine();
    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 5, 0);
    pass_turn(&mut engine, 1);
    pass_turn(&mut engine, 1);
    pass_turn(&mut engine, 1);
    roll_and_move(&mut engine, 5, 0);
    roll_and_move(&mut engine, 6, 0);
    roll_and_move(&mut engine, 3, 0);
    pass_turn(&mut engine, 1);
    pass_turn(&mut engine, 1);

    // Red has nothing on the board again.
    let outcome = engine.apply_roll(4).unwrap();
    assert!(outcome.turn_passed);
    assert_eq!(engine.current_player(), P2);
}

#[test]
fn test_custom_names_appear_in_log() {
    let config = LudoConfig::builder()
        .player_names(["Ada", "Ben", "Cal", "Dee"])
        .seed(3)
        .build()
        .unwrap();
    let mut engine = LudoEngine::new(config);

    roll_and_move(&mut engine, 6, 1);

    assert_eq!(
        engine.snapshot().log_lines(),
        vec![
            "Ada rolled a 6".to_string(),
            "Ada's Red piece 2 moved out of base to start position.".to_string(),
        ]
    );
}

#[test]
fn test_log_entries_carry_turn_numbers() {
    let mut engine = engine();
    pass_turn(&mut engine, 3);
    pass_turn(&mut engine, 4);

    let turns: Vec<_> = engine.snapshot().log.iter().map(|e| e.turn).collect();
    assert_eq!(turns, vec![1, 1, 2, 2]);
}

#[test]
fn test_reset_keeps_table() {
    let config = LudoConfig::builder()
        .player_names(["Ada", "Ben", "Cal", "Dee"])
        .seed(3)
        .build()
        .unwrap();
    let mut engine = LudoEngine::new(config);
    roll_and_move(&mut engine, 6, 0);

    engine.reset();

    let view = engine.snapshot();
    assert!(view.log.is_empty());
    assert_eq!(view.player(P4).name, "Dee");
    assert!(view.players.values().all(|p| p.all_in_base()));
}
