//! Error types surfaced by the turn runner and its collaborators.

use thiserror::Error;

/// Broad failure class, used by the chat surface to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Backend,
    RunawayLoop,
}

#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Model requested unregistered tool '{0}'")]
    UnregisteredTool(String),

    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Backend timed out after {0}ms")]
    Timeout(u64),

    #[error("Tool loop exceeded {max_iterations} iterations without a final answer")]
    RunawayLoop { max_iterations: usize },
}

impl BuddyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_)
            | Self::UnregisteredTool(_)
            | Self::DuplicateTool(_)
            | Self::UnknownSession(_) => ErrorKind::Configuration,
            Self::Network(_)
            | Self::Api { .. }
            | Self::Authentication(_)
            | Self::MalformedResponse(_)
            | Self::Timeout(_) => ErrorKind::Backend,
            Self::RunawayLoop { .. } => ErrorKind::RunawayLoop,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_backend(&self) -> bool {
        self.kind() == ErrorKind::Backend
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuddyError>;
