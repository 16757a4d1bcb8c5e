//! Core game logic: the product-catalog board, move validation, win
//! detection, and the session state machine front ends drive.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, Placement, CATALOG, HEIGHT, SIZE, WIDTH};
pub use player::Owner;
pub use session::{
    ComputerMove, GameSession, PlayerMove, SessionState, Snapshot, TurnOutcome,
};
