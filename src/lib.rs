#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod agent;
#[cfg(feature = "std")]
mod agent_cli;
mod bitboard;
mod common;
mod config;
mod game;
mod global;
mod local;
#[cfg(feature = "std")]
mod logging;
pub mod search;
#[cfg(feature = "std")]
pub mod ui;

pub use agent::*;
#[cfg(feature = "std")]
pub use agent_cli::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use global::*;
pub use local::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
