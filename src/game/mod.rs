//! Core Connect Four game logic: board representation, player identities, and
//! the game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use player::PlayerId;
pub use state::{GameState, GameStatus, Placement};
