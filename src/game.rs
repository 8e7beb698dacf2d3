//! Turn orchestration: move validation, application, undo and outcome.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    common::{Move, MoveError, Outcome, Player},
    config::{GRID, NUM_BOARDS},
    global::GlobalBoard,
};

/// One applied move, with everything needed to take it back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mov: Move,
    /// Player who made the move.
    pub player: Player,
    /// Active-board constraint in force before the move.
    prev_active: Option<usize>,
    /// Whether this move locked in a local-board win.
    pub won_board: bool,
}

/// Core game logic holding the global board, the turn state and the move
/// history. Created once per game session; the search mutates it in place
/// and rewinds through [`GameEngine::undo_move`].
pub struct GameEngine {
    board: GlobalBoard,
    current: Player,
    active: Option<usize>,
    history: Vec<MoveRecord>,
}

impl GameEngine {
    /// New game: empty boards, player one to move, free board choice.
    pub fn new() -> Self {
        GameEngine {
            board: GlobalBoard::new(),
            current: Player::One,
            active: None,
            history: Vec::new(),
        }
    }

    /// Immutable view of the global board.
    pub fn board(&self) -> &GlobalBoard {
        &self.board
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Board index the next move is pointed at, `None` for free choice.
    /// The focus flags already account for the target being closed.
    pub fn active_board(&self) -> Option<usize> {
        self.active
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Every legal move in fixed order: board index ascending, then row,
    /// then column. The search relies on this order for tie-breaking.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.outcome() != Outcome::InProgress {
            return moves;
        }
        for (i, board) in self.board.locals().iter().enumerate() {
            if !board.focus() {
                continue;
            }
            for r in 0..GRID {
                for c in 0..GRID {
                    if board.occupied().get(r, c).unwrap_or(true) {
                        continue;
                    }
                    moves.push(Move::new(i, r, c));
                }
            }
        }
        moves
    }

    /// Validate and apply a move for the current player.
    ///
    /// On success the local win (if any) is recorded on the meta grid, the
    /// focus set is recomputed from the landed cell, the move is appended to
    /// the history and the turn passes. On failure nothing changes.
    pub fn make_move(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if self.outcome() != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if mov.board >= NUM_BOARDS || mov.row >= GRID || mov.col >= GRID {
            return Err(MoveError::InvalidIndex);
        }
        if !self.board.is_legal_board(mov.board) {
            return Err(if self.board.local(mov.board)?.playable() {
                MoveError::BoardNotInFocus
            } else {
                MoveError::BoardNotPlayable
            });
        }

        let player = self.current;
        self.board.local_mut(mov.board)?.place(mov.row, mov.col, player)?;

        let won_board = self.board.local_mut(mov.board)?.has_tic_tac_toe(player);
        if won_board {
            self.board.record_local_result(mov.board, player)?;
            log::debug!("player {} claims board {}", player, mov.board);
        }

        let target = mov.target_board();
        self.board.recompute_focus(Some(target))?;
        self.history.push(MoveRecord {
            mov,
            player,
            prev_active: self.active,
            won_board,
        });
        self.active = Some(target);
        self.current = player.opponent();
        Ok(self.outcome())
    }

    /// Take back the most recent move, restoring the exact pre-move state:
    /// cell contents, local winner/playable flags, meta grid, focus set,
    /// active-board constraint and player to move.
    pub fn undo_move(&mut self) -> Result<Move, MoveError> {
        let record = self.history.pop().ok_or(MoveError::NoHistory)?;
        let Move { board, row, col } = record.mov;

        self.board.local_mut(board)?.remove(row, col)?;
        // Rebuild the board's winner from its cells, then mirror it onto the
        // meta grid rather than trusting the stale entry.
        self.board.local_mut(board)?.refresh();
        self.board.clear_local_result(board)?;
        if let Some(winner) = self.board.local(board)?.winner() {
            self.board.record_local_result(board, winner)?;
        }

        self.active = record.prev_active;
        self.board.recompute_focus(self.active)?;
        self.current = record.player;
        Ok(record.mov)
    }

    /// Terminal status of the game, derived from the meta grid.
    pub fn outcome(&self) -> Outcome {
        if self.board.has_tic_tac_toe(Player::One) {
            Outcome::Win(Player::One)
        } else if self.board.has_tic_tac_toe(Player::Two) {
            Outcome::Win(Player::Two)
        } else if self.board.is_globally_drawn() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
