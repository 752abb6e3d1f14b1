//! Two-player tic-tac-toe front end.
//!
//! The game logic lives in [`tictactoe_core`]. This crate is the
//! presentation layer around it.
//!
//! # Architecture
//!
//! - **Controller**: owns the single game and turns clicks/keys into calls
//! - **View**: read-only snapshot rebuilt after every event
//! - **TUI**: ratatui board screen with mouse and keyboard input
//! - **Replay**: scripted, non-interactive play for the command line
//! - **Config**: TOML theme and log settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod controller;
mod replay;
pub mod tui;
mod view;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, Rgb, Theme};
pub use controller::{CellActivation, Controller};
pub use replay::{MoveArg, replay};
pub use view::{BoardView, status_message};
