//! Error taxonomy for the engine.
//!
//! Every error here is either a construction-time problem (bad level data,
//! unknown content) or programmer misuse of the engine. Expected fast player
//! input, such as clicking a locked board, is never an error: the engine
//! reports it as an ignored selection instead.

use thiserror::Error;

use crate::cards::ContentId;
use crate::levels::LevelId;

/// Unified error type for catalog, deck building and engine operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Grid dimensions are malformed (zero sized or an odd slot count).
    #[error("Invalid level: {reason}")]
    InvalidLevel { reason: String },

    /// Not enough distinct content for the requested number of pairs.
    #[error("Insufficient pool: need {needed} entries, have {available}")]
    InsufficientPool { needed: usize, available: usize },

    /// A level or counterpart map references content absent from the registry.
    #[error("Unknown content id: {0}")]
    UnknownContentId(ContentId),

    /// Level lookup miss.
    #[error("Level not found: {0}")]
    NotFound(LevelId),

    /// Engine misuse (double resolve, selecting before start, ...).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The same content id was registered twice.
    #[error("Duplicate content id: {0}")]
    DuplicateContentId(ContentId),

    /// Configuration data could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MatchError {
    /// Create an invalid level error.
    pub fn invalid_level(reason: impl Into<String>) -> Self {
        Self::InvalidLevel {
            reason: reason.into(),
        }
    }

    /// Create an invalid state error.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;
