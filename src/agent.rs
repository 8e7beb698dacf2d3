//! Interface implemented by different move choosers.

use crate::{
    common::{Move, MoveError, Player},
    game::GameEngine,
    search,
};
use rand::rngs::SmallRng;
use rand::Rng;

/// A source of moves for one side of the game.
///
/// `choose_move` takes the engine mutably because the search explores by
/// mutating and rewinding it; the engine is returned in its exact pre-call
/// state. `None` means the game is already decided.
pub trait Agent {
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
    ) -> Result<Option<Move>, MoveError>;
}

/// Computer player backed by the fixed-depth minimax search.
pub struct SearchAgent {
    depth: u32,
}

impl SearchAgent {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Agent for SearchAgent {
    fn choose_move(
        &mut self,
        _rng: &mut SmallRng,
        engine: &mut GameEngine,
    ) -> Result<Option<Move>, MoveError> {
        let maximizing: Player = engine.current_player();
        search::best_move(engine, self.depth, maximizing)
    }
}

/// Baseline player choosing uniformly among the legal moves.
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &mut GameEngine,
    ) -> Result<Option<Move>, MoveError> {
        let moves = engine.legal_moves();
        if moves.is_empty() {
            return Ok(None);
        }
        let pick = rng.random_range(0..moves.len());
        Ok(Some(moves[pick]))
    }
}
