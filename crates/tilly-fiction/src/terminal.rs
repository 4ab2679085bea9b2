//! The terminal I/O seam between the game and whatever renders it.

use crate::error::FictionResult;

/// Something that can show text to the player and read their replies.
pub trait Terminal {
    /// Show a block of text, followed by a line break. Implementations may
    /// pace or animate it.
    fn display(&mut self, text: &str) -> FictionResult<()>;

    /// Show `prompt` and block until the player enters a line. Returns the
    /// line as typed, without its line terminator.
    ///
    /// Returns [`FictionError::InputClosed`](crate::FictionError::InputClosed)
    /// when no more input will arrive.
    fn read_line(&mut self, prompt: &str) -> FictionResult<String>;

    /// Wipe the screen. Cosmetic; the default does nothing.
    fn clear(&mut self) -> FictionResult<()> {
        Ok(())
    }
}
