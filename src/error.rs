use crate::message::{MessageButton, MessageResult};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MessageError>;

/// Errors reported by a [`MessageService`](crate::service::MessageService).
#[derive(Debug, Error)]
pub enum MessageError {
    /// A required argument is absent, empty, or whitespace-only.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: &'static str },

    /// Reading the answer or writing the message failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A prepared answer names a button the message does not offer.
    #[error("result {result:?} is not offered by button set {button:?}")]
    UnexpectedResult {
        result: MessageResult,
        button: MessageButton,
    },

    /// The rendering backend failed.
    #[error("message backend failed: {0:#}")]
    Backend(#[from] anyhow::Error),
}

impl MessageError {
    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        MessageError::InvalidArgument { name, reason }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MessageError::InvalidArgument { .. })
    }
}
