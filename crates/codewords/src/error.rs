use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodexError>;

#[derive(Debug, Error)]
pub enum CodexError {
    #[error("failed to read reference file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference file {path:?} has {count} lines; labels and item lists must pair up")]
    OddEntryCount { path: PathBuf, count: usize },

    #[error("reference file {path:?} line {line}: expected {expected}")]
    MisplacedEntry {
        path: PathBuf,
        line: usize,
        expected: &'static str,
    },

    #[error("invalid category index: {0}")]
    InvalidIndex(i64),

    /// An integer index too large to represent, kept as written.
    #[error("invalid category index: {0}")]
    IndexOutOfRange(String),
}

impl CodexError {
    /// True for failures raised while reading or validating the reference file.
    pub fn is_load_error(&self) -> bool {
        !self.is_index_error()
    }

    /// True for category indices that name no category.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            CodexError::InvalidIndex(_) | CodexError::IndexOutOfRange(_)
        )
    }

    /// The reference file a load failure concerns.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            CodexError::Io { path, .. }
            | CodexError::OddEntryCount { path, .. }
            | CodexError::MisplacedEntry { path, .. } => Some(path),
            CodexError::InvalidIndex(_) | CodexError::IndexOutOfRange(_) => None,
        }
    }
}
