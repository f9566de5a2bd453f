use std::path::{Path, PathBuf};

/// Failure to turn a file on disk into a [`Transcript`](crate::Transcript).
///
/// There is no partial result: any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("transcript not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected transcript shape in {}: {detail}", path.display())]
    Shape { path: PathBuf, detail: String },
}

/// Failure to parse an in-memory export; [`LoadError`] adds the file path.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected transcript shape: {0}")]
    Shape(String),
}

impl ParseError {
    pub(crate) fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            ParseError::Json(source) => LoadError::Parse { path, source },
            ParseError::Shape(detail) => LoadError::Shape { path, detail },
        }
    }
}

/// A message id occurred twice within one chat history.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate message id: {0}")]
pub struct DuplicateMessageId(pub String);

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
