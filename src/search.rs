//! Fixed-depth exhaustive minimax over the game engine.
//!
//! The search walks the move tree depth-first in place: apply a move,
//! recurse, take it back. Every `make_move` is matched by exactly one
//! `undo_move` before returning, so the engine comes back in its exact
//! pre-search state. No pruning, caching or move ordering.

use crate::{
    common::{Move, MoveError, Outcome, Player},
    config::{BOARD_SCORE, WIN_SCORE},
    game::GameEngine,
};

/// Static score of the current position from `maximizing`'s point of view.
///
/// Decided games dominate everything else; otherwise the score is a material
/// count over the meta grid: one point per captured local board.
pub fn evaluate(engine: &GameEngine, maximizing: Player) -> i32 {
    match engine.outcome() {
        Outcome::Win(winner) => {
            if winner == maximizing {
                WIN_SCORE
            } else {
                -WIN_SCORE
            }
        }
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let mut score = 0;
            for board in engine.board().locals() {
                match board.winner() {
                    Some(w) if w == maximizing => score += BOARD_SCORE,
                    Some(_) => score -= BOARD_SCORE,
                    None => {}
                }
            }
            score
        }
    }
}

/// Pick the best move for the player to move, searching `depth` plies.
///
/// Candidate moves are scored in the engine's fixed enumeration order
/// (board index ascending, then row, then column); the first move with the
/// best score wins ties, so results are reproducible. Returns `None` when
/// the game is already decided.
pub fn best_move(
    engine: &mut GameEngine,
    depth: u32,
    maximizing: Player,
) -> Result<Option<Move>, MoveError> {
    if engine.outcome() != Outcome::InProgress {
        return Ok(None);
    }
    let to_move = engine.current_player();
    let mut best: Option<(Move, i32)> = None;

    for mov in engine.legal_moves() {
        engine.make_move(mov)?;
        let score = minimax(engine, depth.saturating_sub(1), maximizing);
        engine.undo_move()?;
        let score = score?;

        let improved = match best {
            None => true,
            Some((_, best_score)) => {
                if to_move == maximizing {
                    score > best_score
                } else {
                    score < best_score
                }
            }
        };
        if improved {
            best = Some((mov, score));
        }
    }
    Ok(best.map(|(mov, _)| mov))
}

fn minimax(engine: &mut GameEngine, depth: u32, maximizing: Player) -> Result<i32, MoveError> {
    if depth == 0 || engine.outcome() != Outcome::InProgress {
        return Ok(evaluate(engine, maximizing));
    }

    let is_max = engine.current_player() == maximizing;
    let mut best = if is_max { i32::MIN } else { i32::MAX };

    for mov in engine.legal_moves() {
        engine.make_move(mov)?;
        let score = minimax(engine, depth - 1, maximizing);
        engine.undo_move()?;
        let score = score?;
        if is_max {
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }
    Ok(best)
}
