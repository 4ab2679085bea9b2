//! Error types for the fiction engine.

use std::io;

use thiserror::Error;
use tilly_core::TillyError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a session.
///
/// Mistakes the player makes are not errors; they come back as narration.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world map or game state is inconsistent.
    #[error(transparent)]
    Core(#[from] TillyError),

    /// The terminal failed to read or write.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    /// The player's input stream ended.
    #[error("input closed")]
    InputClosed,
}
