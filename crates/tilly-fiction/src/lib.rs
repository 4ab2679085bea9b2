//! Interactive fiction engine for Finding Tilly.
//!
//! Turns raw player input into commands, runs them against the session
//! state, and drives the whole play-through through a [`Terminal`].

/// Session configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// The session loop from title screen to win or quit.
pub mod game_loop;
/// Player-facing screens and prompts.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// Command interpreter over one play-through.
pub mod session;
/// The terminal I/O seam.
pub mod terminal;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use game_loop::{run, run_with_rng};
pub use parser::{Command, parse_command};
pub use session::{Outcome, Response, SessionSummary, TillySession};
pub use terminal::Terminal;
