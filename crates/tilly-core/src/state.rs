use rand::Rng;

use crate::error::{TillyError, TillyResult};
use crate::world::{START_LOCATION, WorldMap};

/// Everything that changes during one play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The name the player typed, verbatim.
    pub player_name: String,
    /// Where the player is. Always a key of the world map.
    pub current_location: String,
    /// Where Tilly is hiding.
    pub target_location: String,
    /// Items picked up, in order of acquisition.
    pub inventory: Vec<String>,
    /// Commands processed so far, valid or not.
    pub moves: u32,
    /// Hints requested so far.
    pub hints: u32,
}

impl GameState {
    /// Create a state with an explicit target. Both locations must exist.
    pub fn new(
        world: &WorldMap,
        player_name: impl Into<String>,
        current_location: impl Into<String>,
        target_location: impl Into<String>,
    ) -> TillyResult<Self> {
        let current_location = current_location.into();
        let target_location = target_location.into();
        for id in [&current_location, &target_location] {
            if !world.contains(id) {
                return Err(TillyError::InvalidLocation(id.clone()));
            }
        }

        Ok(Self {
            player_name: player_name.into(),
            current_location,
            target_location,
            inventory: Vec::new(),
            moves: 0,
            hints: 0,
        })
    }

    /// Start a session at [`START_LOCATION`] with Tilly hidden in a location
    /// drawn uniformly from the whole map, the start included.
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn start<R: Rng>(
        world: &WorldMap,
        player_name: impl Into<String>,
        rng: &mut R,
    ) -> TillyResult<Self> {
        if world.is_empty() {
            return Err(TillyError::EmptyWorld);
        }

        let pick = rng.random_range(0..world.len());
        let target = world.locations()[pick].id.clone();
        tracing::debug!(hiding_spot = %target, "hiding spot chosen");

        Self::new(world, player_name, START_LOCATION, target)
    }

    /// Whether the player is standing where Tilly hides.
    pub fn at_target(&self) -> bool {
        self.current_location == self.target_location
    }
}
