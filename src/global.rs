//! The 3×3 grid of local boards plus the meta grid of their outcomes.

use crate::bitboard::BitBoard;
use crate::common::{Cell, MoveError, Player};
use crate::config::{GRID, NUM_BOARDS};
use crate::local::{has_line, LocalBoard};

type BB = BitBoard<u16, { GRID }>;

/// Global game board. The meta grid mirrors which player has claimed each
/// local board; `meta` is non-empty at (r, c) iff local board `3r + c` has a
/// recorded winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalBoard {
    locals: [LocalBoard; NUM_BOARDS],
    meta: [BB; 2],
}

impl GlobalBoard {
    pub fn new() -> Self {
        GlobalBoard {
            locals: [LocalBoard::new(); NUM_BOARDS],
            meta: [BB::new(); 2],
        }
    }

    /// The local board at `index` (0-8, row-major).
    pub fn local(&self, index: usize) -> Result<&LocalBoard, MoveError> {
        self.locals.get(index).ok_or(MoveError::InvalidIndex)
    }

    /// Mutable access to a local board, for setup and for the engine.
    pub fn local_mut(&mut self, index: usize) -> Result<&mut LocalBoard, MoveError> {
        self.locals.get_mut(index).ok_or(MoveError::InvalidIndex)
    }

    /// All nine local boards in index order.
    pub fn locals(&self) -> &[LocalBoard; NUM_BOARDS] {
        &self.locals
    }

    /// Meta-grid cell for local board `3 * row + col`.
    pub fn meta_cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if self.meta[0].get(row, col).map_err(|_| MoveError::InvalidIndex)? {
            Ok(Cell::Taken(Player::One))
        } else if self.meta[1].get(row, col)? {
            Ok(Cell::Taken(Player::Two))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Snapshot of the meta grid, for rendering.
    pub fn meta_cells(&self) -> [[Cell; GRID]; GRID] {
        let mut out = [[Cell::Empty; GRID]; GRID];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if self.meta[0].get(r, c).unwrap_or(false) {
                    *cell = Cell::Taken(Player::One);
                } else if self.meta[1].get(r, c).unwrap_or(false) {
                    *cell = Cell::Taken(Player::Two);
                }
            }
        }
        out
    }

    /// Record a decided local board on the meta grid. Called exactly once
    /// per local win, right after the win is locked in.
    pub fn record_local_result(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        if index >= NUM_BOARDS {
            return Err(MoveError::InvalidIndex);
        }
        self.meta[player.index()].set(index / GRID, index % GRID)?;
        Ok(())
    }

    /// Erase a local result from the meta grid, for undo.
    pub(crate) fn clear_local_result(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= NUM_BOARDS {
            return Err(MoveError::InvalidIndex);
        }
        self.meta[0].clear(index / GRID, index % GRID)?;
        self.meta[1].clear(index / GRID, index % GRID)?;
        Ok(())
    }

    /// Check whether `player` owns three local boards in a line.
    pub fn has_tic_tac_toe(&self, player: Player) -> bool {
        has_line(self.meta[player.index()])
    }

    /// True iff no board can take another move and nobody has a global line.
    /// A locally drawn board counts as exhausted even though it has no owner.
    pub fn is_globally_drawn(&self) -> bool {
        self.locals
            .iter()
            .all(|b| b.winner().is_some() || b.is_full())
            && !self.has_tic_tac_toe(Player::One)
            && !self.has_tic_tac_toe(Player::Two)
    }

    /// Rederive every board's playable flag from its cells and reassign
    /// focus. `target` is the board the last move points at (`None` before
    /// the first move, where every open board is a legal destination).
    ///
    /// Runs after every move and every undo: a move can close boards other
    /// than its target, so focus is never patched incrementally.
    pub fn recompute_focus(&mut self, target: Option<usize>) -> Result<(), MoveError> {
        for board in self.locals.iter_mut() {
            board.refresh();
        }

        let forced = match target {
            Some(t) => {
                let board = self.locals.get(t).ok_or(MoveError::InvalidIndex)?;
                board.playable().then_some(t)
            }
            None => None,
        };

        match forced {
            // Send-to rule: only the targeted board is open.
            Some(t) => {
                for (i, board) in self.locals.iter_mut().enumerate() {
                    board.set_focus(i == t);
                }
            }
            // Target closed (or free choice): every playable board is open.
            None => {
                for board in self.locals.iter_mut() {
                    let playable = board.playable();
                    board.set_focus(playable);
                }
            }
        }
        Ok(())
    }

    /// Indices of the boards a move may currently land in, ascending.
    /// Derived from the focus flags, never maintained separately.
    pub fn legal_boards(&self) -> impl Iterator<Item = usize> + '_ {
        self.locals
            .iter()
            .enumerate()
            .filter(|(_, b)| b.focus())
            .map(|(i, _)| i)
    }

    /// True if `index` is in the current focus set.
    pub fn is_legal_board(&self, index: usize) -> bool {
        self.locals.get(index).map(|b| b.focus()).unwrap_or(false)
    }
}

impl Default for GlobalBoard {
    fn default() -> Self {
        Self::new()
    }
}
