//! Common types for Ultimate Tic-Tac-Toe: players, cells, moves, errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two players. `One` plays X and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into per-player mask pairs (`One` = 0, `Two` = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Display mark for this player.
    #[inline]
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of a single cell, on a local board or on the meta grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    /// Display symbol: `.` for empty, the player's mark otherwise.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Taken(p) => p.mark(),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<Player>> for Cell {
    fn from(p: Option<Player>) -> Self {
        match p {
            Some(p) => Cell::Taken(p),
            None => Cell::Empty,
        }
    }
}

/// A move request: local board index (0-8, row-major) and cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub board: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(board: usize, row: usize, col: usize) -> Self {
        Move { board, row, col }
    }

    /// Index of the local board the opponent is sent to by this move.
    #[inline]
    pub fn target_board(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "board {} cell ({}, {})", self.board, self.row, self.col)
    }
}

/// Result of the game as seen from the meta grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Errors returned by board and engine operations. All variants are
/// recoverable: a rejected move leaves the engine state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Underlying bitboard error (invalid size or index).
    BitBoard(BitBoardError),
    /// Board, row or column index is out of range.
    InvalidIndex,
    /// Target cell is already occupied.
    CellOccupied,
    /// Target board has been won or is full.
    BoardNotPlayable,
    /// Target board is playable but not in the current focus set.
    BoardNotInFocus,
    /// The game already has a terminal outcome.
    GameOver,
    /// Undo requested with no moves in the history.
    NoHistory,
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        MoveError::BitBoard(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            MoveError::InvalidIndex => write!(f, "Board, row or column index is out of range"),
            MoveError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveError::BoardNotPlayable => write!(f, "Board has been won or is full"),
            MoveError::BoardNotInFocus => write!(f, "Board is not a legal destination this turn"),
            MoveError::GameOver => write!(f, "Game has already finished"),
            MoveError::NoHistory => write!(f, "No moves left to undo"),
        }
    }
}
