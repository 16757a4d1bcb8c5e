//! # Multiplication Strategy Game
//!
//! A human-vs-computer strategy game on a fixed 6×6 board whose cells carry
//! the 36 distinct products reachable from factors 1–9. Each round a mover
//! picks a factor; multiplied by the opponent's previous factor it identifies
//! a cell, which the mover claims if free. Four in a row, column, or diagonal
//! wins. Ships with a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: product board, win detection, session state machine
//! - [`ai`] — Tiered computer-move planner (win / block / build / heuristic)
//! - [`cpu`] — Simulated shift-add multiplier with diagnostic registers
//! - [`save`] — Fixed-layout binary save files
//! - [`ui`] — Terminal UI: board view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod cpu;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
