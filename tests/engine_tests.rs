use uttt::{Cell, GameEngine, Move, MoveError, Outcome, Player};

fn play(engine: &mut GameEngine, moves: &[(usize, usize, usize)]) {
    for &(b, r, c) in moves {
        engine.make_move(Move::new(b, r, c)).unwrap();
    }
}

/// Five-move sequence where player one captures board 0 with its top row.
const WIN_BOARD_0: [(usize, usize, usize); 5] =
    [(0, 0, 2), (2, 0, 0), (0, 0, 1), (1, 0, 0), (0, 0, 0)];

/// Extends `WIN_BOARD_0` until player one owns boards 0, 1 and 2, winning
/// the game on the top meta row.
const WIN_GLOBAL: [(usize, usize, usize); 17] = [
    (0, 0, 2),
    (2, 0, 0),
    (0, 0, 1),
    (1, 0, 0),
    (0, 0, 0),
    (4, 0, 0),
    (1, 2, 0),
    (6, 0, 0),
    (1, 2, 1),
    (7, 0, 0),
    (1, 2, 2),
    (8, 0, 0),
    (2, 2, 0),
    (6, 0, 1),
    (2, 2, 1),
    (7, 0, 1),
    (2, 2, 2),
];

#[test]
fn test_opening_position() {
    let engine = GameEngine::new();
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.active_board(), None);
    assert_eq!(engine.outcome(), Outcome::InProgress);
    // free choice over the whole grid
    assert_eq!(engine.legal_moves().len(), 81);
}

#[test]
fn test_center_move_forces_center_board() {
    let mut engine = GameEngine::new();
    engine.make_move(Move::new(4, 1, 1)).unwrap();

    // landing on a board's own center sends the opponent right back to it
    assert_eq!(engine.active_board(), Some(4));
    let legal: Vec<usize> = engine.board().legal_boards().collect();
    assert_eq!(legal, vec![4]);
    assert_eq!(engine.current_player(), Player::Two);
    // 8 empty cells remain in the forced board
    assert_eq!(engine.legal_moves().len(), 8);
}

#[test]
fn test_move_switches_player_and_targets_cell_position() {
    let mut engine = GameEngine::new();
    engine.make_move(Move::new(3, 2, 1)).unwrap();
    assert_eq!(engine.active_board(), Some(7));
    let legal: Vec<usize> = engine.board().legal_boards().collect();
    assert_eq!(legal, vec![7]);
}

#[test]
fn test_local_win_closes_board() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_BOARD_0);

    let board0 = engine.board().local(0).unwrap();
    assert_eq!(board0.winner(), Some(Player::One));
    assert!(!board0.playable());
    assert!(!board0.is_full());
    assert_eq!(
        engine.board().meta_cell(0, 0).unwrap(),
        Cell::Taken(Player::One)
    );

    // the winning move targeted board 0 itself, which is now closed, so the
    // opponent may play in any open board except it
    let legal: Vec<usize> = engine.board().legal_boards().collect();
    assert_eq!(legal, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(
        engine.make_move(Move::new(0, 2, 2)).unwrap_err(),
        MoveError::BoardNotPlayable
    );
}

#[test]
fn test_global_win_outcome() {
    let mut engine = GameEngine::new();
    for (i, &(b, r, c)) in WIN_GLOBAL.iter().enumerate() {
        assert_eq!(engine.outcome(), Outcome::InProgress, "move {}", i);
        engine.make_move(Move::new(b, r, c)).unwrap();
    }

    assert_eq!(engine.outcome(), Outcome::Win(Player::One));
    assert!(engine.legal_moves().is_empty());
    assert_eq!(
        engine.make_move(Move::new(3, 0, 0)).unwrap_err(),
        MoveError::GameOver
    );
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut engine = GameEngine::new();
    engine.make_move(Move::new(4, 1, 1)).unwrap();
    let snapshot = *engine.board();

    // wrong board while board 4 is forced
    assert_eq!(
        engine.make_move(Move::new(3, 0, 0)).unwrap_err(),
        MoveError::BoardNotInFocus
    );
    // occupied cell
    assert_eq!(
        engine.make_move(Move::new(4, 1, 1)).unwrap_err(),
        MoveError::CellOccupied
    );
    // out of range
    assert_eq!(
        engine.make_move(Move::new(9, 0, 0)).unwrap_err(),
        MoveError::InvalidIndex
    );
    assert_eq!(
        engine.make_move(Move::new(4, 3, 0)).unwrap_err(),
        MoveError::InvalidIndex
    );

    assert_eq!(*engine.board(), snapshot);
    assert_eq!(engine.current_player(), Player::Two);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_undo_empty_history() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.undo_move().unwrap_err(), MoveError::NoHistory);
}

#[test]
fn test_undo_restores_opening() {
    let mut engine = GameEngine::new();
    engine.make_move(Move::new(4, 1, 1)).unwrap();
    engine.undo_move().unwrap();

    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.active_board(), None);
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.legal_moves().len(), 81);
    assert_eq!(*engine.board(), *GameEngine::new().board());
}

#[test]
fn test_undo_reverts_local_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_BOARD_0[..4]);
    let snapshot = *engine.board();
    let player = engine.current_player();
    let active = engine.active_board();

    // the winning move...
    engine.make_move(Move::new(0, 0, 0)).unwrap();
    assert_eq!(
        engine.board().local(0).unwrap().winner(),
        Some(Player::One)
    );

    // ...and its exact reversal: winner, meta entry, playable and focus all
    // come back
    engine.undo_move().unwrap();
    assert_eq!(*engine.board(), snapshot);
    assert_eq!(engine.board().local(0).unwrap().winner(), None);
    assert!(engine.board().local(0).unwrap().playable());
    assert_eq!(engine.board().meta_cell(0, 0).unwrap(), Cell::Empty);
    assert_eq!(engine.current_player(), player);
    assert_eq!(engine.active_board(), active);

    // replaying the same move wins the board again
    engine.make_move(Move::new(0, 0, 0)).unwrap();
    assert_eq!(
        engine.board().local(0).unwrap().winner(),
        Some(Player::One)
    );
}

#[test]
fn test_undo_past_global_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &WIN_GLOBAL);
    assert_eq!(engine.outcome(), Outcome::Win(Player::One));

    engine.undo_move().unwrap();
    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.board().local(2).unwrap().winner(), None);

    // rewind the whole game
    while engine.move_count() > 0 {
        engine.undo_move().unwrap();
    }
    assert_eq!(*engine.board(), *GameEngine::new().board());
    assert_eq!(engine.legal_moves().len(), 81);
}
