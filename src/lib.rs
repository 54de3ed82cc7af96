//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built on
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, session state machine
//! - [`ui`] — Terminal game view and headless scripted replay
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
