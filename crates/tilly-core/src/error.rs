/// Alias for `Result<T, TillyError>`.
pub type TillyResult<T> = Result<T, TillyError>;

/// Errors that can occur when building or querying the world map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TillyError {
    /// A location id was referenced that the world map does not contain.
    #[error("invalid location: \"{0}\"")]
    InvalidLocation(String),

    /// Two locations were declared with the same id.
    #[error("location already exists: \"{0}\"")]
    DuplicateLocation(String),

    /// The world map has no locations to choose a target from.
    #[error("world map has no locations")]
    EmptyWorld,
}
