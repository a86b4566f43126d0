use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Input(String),

    #[error("prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("prediction request failed ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    ResponseShape(String),

    #[error("prediction request timed out after {0:?}")]
    Timeout(Duration),
}

/// Caller-facing error categories. A rejected status and a failed connection
/// are both [`ErrorKind::Transport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Input,
    Transport,
    ResponseShape,
    Timeout,
}

impl VisionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Input(_) => ErrorKind::Input,
            Self::Transport(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::ResponseShape(_) => ErrorKind::ResponseShape,
            Self::Timeout(_) => ErrorKind::Timeout,
        }
    }

    /// Error for a non-success response. An empty body is reported as such.
    pub(crate) fn status(status: u16, body: String) -> Self {
        let body = if body.trim().is_empty() {
            "no response body".to_string()
        } else {
            body
        };
        Self::Status { status, body }
    }
}
