//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built with
//! Ratatui. The engine is a plain value type: every game is an owned
//! [`game::GameState`] that reports what each move changed, so any renderer
//! can drive it.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player identities, state machine
//! - [`ui`] — Terminal UI: board view, key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
