//! Core types for Finding Tilly: locations, the world map, and game state.
//!
//! The world map is a small directed graph of named locations. Each location
//! carries a description, its outbound connections in declared order, and the
//! items lying there. [`GameState`] holds everything that changes during a
//! play-through.

/// Error types used throughout the crate.
pub mod error;
/// A single named place in the world.
pub mod location;
/// Mutable per-session game state.
pub mod state;
/// The static location graph.
pub mod world;

pub use error::{TillyError, TillyResult};
pub use location::Location;
pub use state::GameState;
pub use world::{START_LOCATION, WorldMap};
