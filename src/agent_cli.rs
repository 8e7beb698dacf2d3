#![cfg(feature = "std")]

use std::io::{self, Write};
use std::string::String;

use crate::{
    agent::Agent,
    common::{Move, MoveError},
    game::GameEngine,
};
use rand::rngs::SmallRng;

/// Human player reading moves from stdin.
///
/// When the opponent's last move leaves a free choice, the board index is
/// prompted for first; when the player is forced into a single board, that
/// board is announced and only row/column are asked. Malformed or illegal
/// input re-prompts, so the engine never sees it.
pub struct CliAgent;

impl CliAgent {
    pub fn new() -> Self {
        Self
    }
}

fn read_index(prompt: &str) -> usize {
    loop {
        std::print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            continue;
        }
        match line.trim().parse::<usize>() {
            Ok(v) => return v,
            Err(_) => std::println!("Enter a number"),
        }
    }
}

impl Agent for CliAgent {
    fn choose_move(
        &mut self,
        _rng: &mut SmallRng,
        engine: &mut GameEngine,
    ) -> Result<Option<Move>, MoveError> {
        let player = engine.current_player();
        loop {
            let legal: std::vec::Vec<usize> = engine.board().legal_boards().collect();
            let board = if legal.len() == 1 {
                std::println!("Player {}: you must play in board {}", player, legal[0]);
                legal[0]
            } else {
                read_index(&std::format!("Player {}, choose a board (0-8): ", player))
            };

            let row = read_index(&std::format!(
                "Player {}, choose a row (0-2) in board {}: ",
                player, board
            ));
            let col = read_index(&std::format!(
                "Player {}, choose a column (0-2) in board {}: ",
                player, board
            ));
            let mov = Move::new(board, row, col);

            // Dry-run the validation so the prompt loop owns all retries.
            if engine.legal_moves().contains(&mov) {
                return Ok(Some(mov));
            }
            std::println!("Move not available ({}), try again", mov);
        }
    }
}
