//! Configuration for a play-through.

use std::time::Duration;

/// Configuration for a session and the console it runs on.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for a reproducible hiding spot. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Pause between characters of the typed-text effect. Zero disables it.
    pub typing_delay: Duration,
    /// Clear the screen before each render.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            typing_delay: Duration::from_millis(30),
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-character typing delay.
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Enable or disable screen clearing.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }
}
