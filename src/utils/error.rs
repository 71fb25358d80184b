use crate::utils::ERROR_REPLY;
use thiserror::Error;

/// A failed prompt exchange. Every variant surfaces to the user the same way.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("No HTTP client available")]
    Unavailable,

    #[error("Failed to build multipart body: {0}")]
    InvalidPart(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),
}

impl DispatchError {
    /// Text shown in the conversation in place of a reply.
    pub fn user_message(&self) -> &'static str {
        ERROR_REPLY
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Could not find config directory")]
    NoConfigDir,

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}
