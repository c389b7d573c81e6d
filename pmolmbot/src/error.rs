//! Error types for the bot

/// Result type alias for bot setup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while setting the handler up
///
/// Failures while answering a command never surface here: they are turned
/// into a text reply.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// YAML configuration could not be decoded
    #[error("Configuration parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// List count bounds are inconsistent
    #[error("Invalid list bounds: min={min}, max={max}, default={default}")]
    InvalidListBounds {
        min: usize,
        max: usize,
        default: usize,
    },

    /// The relay client could not be built
    #[error("Client error: {0}")]
    Client(#[from] pmospotify::Error),
}
