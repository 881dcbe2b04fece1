use thiserror::Error;

/// Errors raised while turning already-loaded rows into link structures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A row does not have the expected shape or lacks a required field.
    #[error("malformed row {row}: {message}")]
    Format { row: usize, message: String },

    /// Caller-supplied settings do not fit the input.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl LinkError {
    pub fn format(row: usize, message: impl Into<String>) -> Self {
        Self::Format {
            row,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
