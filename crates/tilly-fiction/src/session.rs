//! Interactive fiction session management.

use rand::Rng;
use tilly_core::{GameState, WorldMap};

use crate::error::FictionResult;
use crate::parser::{Command, parse_command};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep playing.
    Continue,
    /// The player walked into Tilly's hiding spot.
    Win,
    /// The player asked to stop.
    Quit,
}

/// The result of processing one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// What the loop should do next.
    pub outcome: Outcome,
    /// Narration for the player, if the command produced any.
    pub text: Option<String>,
}

impl Response {
    fn silent(outcome: Outcome) -> Self {
        Self {
            outcome,
            text: None,
        }
    }

    fn narrate(outcome: Outcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            text: Some(text.into()),
        }
    }
}

/// Final figures of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// How the session ended.
    pub outcome: Outcome,
    /// The name the player typed.
    pub player_name: String,
    /// Where Tilly was hiding.
    pub target_location: String,
    /// Commands processed, valid or not.
    pub moves: u32,
    /// Hints requested.
    pub hints: u32,
}

/// One play-through: the world being explored and the player's state in it.
pub struct TillySession {
    world: WorldMap,
    state: GameState,
}

impl TillySession {
    /// Start a session at the home location, hiding Tilly somewhere chosen by
    /// `rng`.
    pub fn start<R: Rng>(
        world: WorldMap,
        player_name: impl Into<String>,
        rng: &mut R,
    ) -> FictionResult<Self> {
        let state = GameState::start(&world, player_name, rng)?;
        tracing::info!(player = %state.player_name, "session started");
        Ok(Self { world, state })
    }

    /// Start a session at the home location with Tilly in a known place.
    pub fn with_target(
        world: WorldMap,
        player_name: impl Into<String>,
        target: &str,
    ) -> FictionResult<Self> {
        let state = GameState::new(&world, player_name, tilly_core::START_LOCATION, target)?;
        Ok(Self { world, state })
    }

    /// Get the world as it stands now.
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Get the player state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Summarize the session as it stands.
    pub fn summary(&self, outcome: Outcome) -> SessionSummary {
        SessionSummary {
            outcome,
            player_name: self.state.player_name.clone(),
            target_location: self.state.target_location.clone(),
            moves: self.state.moves,
            hints: self.state.hints,
        }
    }

    /// Process a line of player input.
    ///
    /// Every call counts as a move, whatever the input turns out to be.
    pub fn process(&mut self, input: &str) -> FictionResult<Response> {
        self.state.moves += 1;

        let command = parse_command(input);
        let response = self.execute(&command)?;

        tracing::debug!(
            ?command,
            outcome = ?response.outcome,
            location = %self.state.current_location,
            moves = self.state.moves,
            hints = self.state.hints,
            "command processed"
        );
        Ok(response)
    }

    fn execute(&mut self, command: &Command) -> FictionResult<Response> {
        match command {
            Command::Go { target } => self.do_go(target),
            Command::Take { item } => self.do_take(item),
            Command::Look => Ok(Response::silent(Outcome::Continue)),
            Command::Hint => self.do_hint(),
            Command::Quit => Ok(Response::silent(Outcome::Quit)),
            Command::Unknown { .. } => Ok(Response::narrate(
                Outcome::Continue,
                "I don't understand that command.",
            )),
        }
    }

    fn do_go(&mut self, target: &str) -> FictionResult<Response> {
        let here = self.world.location(&self.state.current_location)?;

        if !here.connects_to(target) {
            return Ok(Response::narrate(
                Outcome::Continue,
                format!("You can't go to {target} from here."),
            ));
        }

        self.state.current_location = target.to_string();
        let outcome = if self.state.at_target() {
            Outcome::Win
        } else {
            Outcome::Continue
        };
        Ok(Response::narrate(
            outcome,
            format!("You go to the {target}."),
        ))
    }

    fn do_take(&mut self, item: &str) -> FictionResult<Response> {
        if !self.world.remove_item(&self.state.current_location, item)? {
            return Ok(Response::narrate(
                Outcome::Continue,
                format!("There's no {item} here."),
            ));
        }

        self.state.inventory.push(item.to_string());
        Ok(Response::narrate(
            Outcome::Continue,
            format!("You take the {item}."),
        ))
    }

    fn do_hint(&mut self) -> FictionResult<Response> {
        self.state.hints += 1;

        if self.state.at_target() {
            return Ok(Response::narrate(
                Outcome::Continue,
                "Tilly is very close! Look carefully!",
            ));
        }

        // One hop only: name the target if it is a direct neighbor.
        let next_step = self
            .world
            .connections_of(&self.state.current_location)?
            .iter()
            .find(|c| **c == self.state.target_location);

        let text = match next_step {
            Some(next) => format!("I think you should check the {next}!"),
            None => "Tilly is hiding somewhere else. Keep exploring!".to_string(),
        };
        Ok(Response::narrate(Outcome::Continue, text))
    }
}
