//! The session loop: title screen, name entry, then render, prompt, and
//! dispatch until the player wins or quits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilly_core::WorldMap;

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator;
use crate::session::{Outcome, SessionSummary, TillySession};
use crate::terminal::Terminal;

/// Run one complete session, seeding the hiding spot from `config`.
pub fn run<T: Terminal + ?Sized>(
    terminal: &mut T,
    world: WorldMap,
    config: &GameConfig,
) -> FictionResult<SessionSummary> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    run_with_rng(terminal, world, &mut rng)
}

/// Run one complete session, drawing the hiding spot from `rng`.
///
/// End of input counts as quitting.
pub fn run_with_rng<T: Terminal + ?Sized, R: Rng>(
    terminal: &mut T,
    world: WorldMap,
    rng: &mut R,
) -> FictionResult<SessionSummary> {
    terminal.clear()?;
    terminal.display(narrator::TITLE)?;
    terminal.display(narrator::INTRO)?;

    let Some(name) = read_or_close(terminal, narrator::NAME_PROMPT)? else {
        let session = TillySession::start(world, "", rng)?;
        return Ok(finish(&session, Outcome::Quit));
    };

    let mut narration = Some(narrator::welcome(&name));
    let mut session = TillySession::start(world, name, rng)?;

    loop {
        terminal.clear()?;
        if let Some(text) = narration.take() {
            terminal.display(&text)?;
        }

        let state = session.state();
        let location = session.world().location(&state.current_location)?;
        terminal.display(&narrator::describe_location(location, &state.inventory))?;
        terminal.display(narrator::command_menu())?;

        let Some(line) = read_or_close(terminal, narrator::COMMAND_PROMPT)? else {
            return Ok(finish(&session, Outcome::Quit));
        };

        let response = session.process(&line)?;
        match response.outcome {
            Outcome::Continue => narration = response.text,
            Outcome::Quit => return Ok(finish(&session, Outcome::Quit)),
            Outcome::Win => {
                terminal.clear()?;
                if let Some(text) = response.text {
                    terminal.display(&text)?;
                }
                let summary = finish(&session, Outcome::Win);
                terminal.display(&narrator::win_screen(&summary))?;
                read_or_close(terminal, narrator::EXIT_PROMPT)?;
                return Ok(summary);
            }
        }
    }
}

fn read_or_close<T: Terminal + ?Sized>(
    terminal: &mut T,
    prompt: &str,
) -> FictionResult<Option<String>> {
    match terminal.read_line(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(FictionError::InputClosed) => {
            tracing::info!("input closed, ending session");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn finish(session: &TillySession, outcome: Outcome) -> SessionSummary {
    let summary = session.summary(outcome);
    tracing::info!(
        outcome = ?summary.outcome,
        moves = summary.moves,
        hints = summary.hints,
        "session ended"
    );
    summary
}
