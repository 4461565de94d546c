use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure to interpret the first line of a header cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("could not parse header level from {0:?}")]
    Level(String),
    #[error("could not parse header text from {0:?}")]
    Text(String),
    #[error("could not parse anchor id from {0:?}")]
    MissingAnchorId(String),
    #[error("generated anchor id {anchor_id:?} is not the one parsed back from {line:?}")]
    AnchorIdMismatch { anchor_id: String, line: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid notebook JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
