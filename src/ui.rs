#![cfg(feature = "std")]

use crate::{config::GRID, game::GameEngine};

/// Print the nine local boards in a 3×3 layout with separators.
pub fn print_global_board(engine: &GameEngine) {
    let locals = engine.board().locals();
    std::println!();
    std::println!("{}", "-".repeat(25));
    for band in 0..GRID {
        for row in 0..GRID {
            std::print!("|");
            for j in 0..GRID {
                let cells = locals[band * GRID + j].cells();
                for col in 0..GRID {
                    std::print!(" {}", cells[row][col].symbol());
                }
                std::print!(" |");
            }
            std::println!();
        }
        std::println!("{}", "-".repeat(25));
    }
}

/// Print the meta grid: which player has claimed each local board.
pub fn print_meta_board(engine: &GameEngine) {
    let meta = engine.board().meta_cells();
    std::println!("Claimed boards:");
    for row in meta.iter() {
        std::print!(" ");
        for cell in row.iter() {
            std::print!(" {}", cell.symbol());
        }
        std::println!();
    }
}
