//! Error types for loading token files and persisting stylesheets.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a YAML token file cannot be turned into a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenFileError {
    /// Malformed YAML, or a document that is not a `root`/`child` mapping.
    #[error("failed to parse token file{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// A token whose value is not a sequence of three scalars.
    #[error("invalid token '{token}' in section '{section}'{}: {message}", location(.path))]
    InvalidToken {
        section: String,
        token: String,
        message: String,
        path: Option<PathBuf>,
    },

    #[error("failed to read token file {}: {message}", .path.display())]
    Load { path: PathBuf, message: String },
}

impl TokenFileError {
    /// Attaches a source path to errors raised while parsing file content.
    pub(crate) fn with_path(self, file: PathBuf) -> Self {
        match self {
            TokenFileError::Parse { message, .. } => TokenFileError::Parse {
                path: Some(file),
                message,
            },
            TokenFileError::InvalidToken {
                section,
                token,
                message,
                ..
            } => TokenFileError::InvalidToken {
                section,
                token,
                message,
                path: Some(file),
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Error type for generating, writing and checking stylesheets.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file on disk differs from what the current tables produce.
    #[error("{} is out of date, regenerate it", .path.display())]
    Stale { path: PathBuf },

    #[error(transparent)]
    TokenFile(#[from] TokenFileError),
}
