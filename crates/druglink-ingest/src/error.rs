use std::path::{Path, PathBuf};

use druglink_model::LinkError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("failed to render mapping rows: {message}")]
    Render { message: String },

    #[error("{path}, line {line}: {message}")]
    Format {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("invalid configuration for {path}: {message}")]
    Configuration { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    pub(crate) fn workbook(path: &Path, error: &impl std::fmt::Display) -> Self {
        Self::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    pub(crate) fn format(path: &Path, line: u64, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// Attach a file path (and source line for row errors) to a [`LinkError`].
    pub(crate) fn from_link(path: &Path, line: u64, error: LinkError) -> Self {
        match error {
            LinkError::Format { message, .. } => Self::format(path, line, message),
            LinkError::Configuration { message } => Self::Configuration {
                path: path.to_path_buf(),
                message,
            },
        }
    }

    /// True for errors caused by caller settings rather than file contents.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingFile { .. } | Self::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
