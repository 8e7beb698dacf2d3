/// Side length of every grid in the game (local boards and the meta grid).
pub const GRID: usize = 3;
/// Number of local boards inside the global board.
pub const NUM_BOARDS: usize = GRID * GRID;

/// The 8 winning lines of a 3×3 grid as row-major bit masks:
/// 3 rows, 3 columns, 2 diagonals.
pub const LINE_MASKS: [u16; 8] = [
    0b000_000_111,
    0b000_111_000,
    0b111_000_000,
    0b001_001_001,
    0b010_010_010,
    0b100_100_100,
    0b100_010_001,
    0b001_010_100,
];

/// Score of a decided game at any depth. Dominates the material heuristic,
/// which is bounded by `NUM_BOARDS * BOARD_SCORE`.
pub const WIN_SCORE: i32 = 1_000;
/// Heuristic weight of one captured local board.
pub const BOARD_SCORE: i32 = 1;

/// Search depth used by the interactive shell unless overridden.
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;
