// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// Both chamber datasets came back empty or unreachable. Terminal.
    #[error("no politician data available (deputes: {deputes}; senateurs: {senateurs})")]
    DataUnavailable { deputes: String, senateurs: String },

    #[error("invalid location: {0}")]
    InvalidLocation(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("fetch failed for {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("cannot decode {location}: {source}")]
    Decode {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
