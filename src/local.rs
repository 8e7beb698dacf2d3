//! A single 3×3 board inside the global grid.

use crate::bitboard::BitBoard;
use crate::common::{Cell, MoveError, Player};
use crate::config::{GRID, LINE_MASKS};

type BB = BitBoard<u16, { GRID }>;

/// Returns true if `marks` covers at least one of the 8 winning lines.
pub(crate) fn has_line(marks: BB) -> bool {
    LINE_MASKS.iter().any(|&m| marks.contains(BB::from_raw(m)))
}

/// One local tic-tac-toe board: per-player mark masks plus derived status.
///
/// `winner` and `playable` are pure functions of the masks; they are cached
/// here for cheap reads but can always be rebuilt with [`LocalBoard::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalBoard {
    marks: [BB; 2],
    winner: Option<Player>,
    playable: bool,
    focus: bool,
}

impl LocalBoard {
    /// Create an empty, playable board. All boards start in focus: before
    /// the first move the whole global grid is open.
    pub fn new() -> Self {
        LocalBoard {
            marks: [BB::new(); 2],
            winner: None,
            playable: true,
            focus: true,
        }
    }

    /// Mask of one player's marks.
    pub fn marks(&self, player: Player) -> BB {
        self.marks[player.index()]
    }

    /// Mask of all occupied cells.
    pub fn occupied(&self) -> BB {
        self.marks[0] | self.marks[1]
    }

    /// Contents of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if self.marks[0].get(row, col).map_err(|_| MoveError::InvalidIndex)? {
            Ok(Cell::Taken(Player::One))
        } else if self.marks[1].get(row, col)? {
            Ok(Cell::Taken(Player::Two))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Snapshot of the full grid, for rendering.
    pub fn cells(&self) -> [[Cell; GRID]; GRID] {
        let mut out = [[Cell::Empty; GRID]; GRID];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if self.marks[0].get(r, c).unwrap_or(false) {
                    *cell = Cell::Taken(Player::One);
                } else if self.marks[1].get(r, c).unwrap_or(false) {
                    *cell = Cell::Taken(Player::Two);
                }
            }
        }
        out
    }

    /// Winner of this board, if its tic-tac-toe has been locked in.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// A board stays playable until it is won or full.
    pub fn playable(&self) -> bool {
        self.playable
    }

    /// Whether this board is a legal destination for the next move.
    pub fn focus(&self) -> bool {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// Place `player`'s mark at (row, col).
    ///
    /// Fails without mutating if the board is closed or the cell is taken.
    /// Win detection is a separate step; placing never updates `winner`.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let taken = self
            .occupied()
            .get(row, col)
            .map_err(|_| MoveError::InvalidIndex)?;
        if !self.playable {
            return Err(MoveError::BoardNotPlayable);
        }
        if taken {
            return Err(MoveError::CellOccupied);
        }
        self.marks[player.index()].set(row, col)?;
        Ok(())
    }

    /// Remove the mark at (row, col), for undo. The caller is responsible
    /// for refreshing derived state afterwards.
    pub(crate) fn remove(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.marks[0].clear(row, col)?;
        self.marks[1].clear(row, col)?;
        Ok(())
    }

    /// Check whether `player` has three in a row. A positive result locks
    /// the win in: `winner` is set and the board closes even though empty
    /// cells may remain.
    pub fn has_tic_tac_toe(&mut self, player: Player) -> bool {
        if has_line(self.marks[player.index()]) {
            self.winner = Some(player);
            self.playable = false;
            true
        } else {
            false
        }
    }

    /// Pure line check without the lock-in side effect.
    pub fn has_line_for(&self, player: Player) -> bool {
        has_line(self.marks[player.index()])
    }

    /// True iff no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// True iff the board is full and neither player has a line.
    pub fn is_drawn(&self) -> bool {
        self.is_full() && !has_line(self.marks[0]) && !has_line(self.marks[1])
    }

    /// Rebuild `winner` and `playable` from the raw masks. Used after undo,
    /// where incremental patching of derived state is exactly the bug class
    /// to avoid.
    pub(crate) fn refresh(&mut self) {
        self.winner = if has_line(self.marks[0]) {
            Some(Player::One)
        } else if has_line(self.marks[1]) {
            Some(Player::Two)
        } else {
            None
        };
        self.playable = self.winner.is_none() && !self.is_full();
    }
}

impl Default for LocalBoard {
    fn default() -> Self {
        Self::new()
    }
}
