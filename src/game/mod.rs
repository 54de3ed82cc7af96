//! Core Connect Four game logic: board representation, players, and the game
//! session state machine.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, Dimensions, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::{Player, PlayerId};
pub use session::{GameSession, GameStatus, MoveResult};
