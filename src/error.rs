// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-level error for configuration and command-line handling.
///
/// The overlay controller itself never fails; only the ambient layers
/// (settings file, CLI) produce errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config Error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config Error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error reported by the player collaborator.
///
/// Both playback errors and cast-relay errors are normalized into this shape
/// before they reach the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerError {
    /// Engine-specific error code (e.g. `"NETWORK_TIMEOUT"`).
    pub code: String,
    /// Human readable description.
    pub message: String,
}

impl PlayerError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}
