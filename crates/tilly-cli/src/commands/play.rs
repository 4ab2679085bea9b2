//! Play one session on the console.

use tilly_core::WorldMap;
use tilly_fiction::GameConfig;

use crate::console::ConsoleTerminal;

pub fn run(config: &GameConfig) -> Result<(), String> {
    let mut terminal = ConsoleTerminal::new(config);
    let summary = tilly_fiction::run(&mut terminal, WorldMap::standard(), config)
        .map_err(|e| e.to_string())?;

    tracing::debug!(
        outcome = ?summary.outcome,
        hiding_spot = %summary.target_location,
        "game over"
    );
    Ok(())
}
