use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeopleError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} has {found} tab-separated fields, expected at least 4")]
    MissingField { line: usize, found: usize },

    #[error("Name list '{list}' has too few entries to sample from")]
    EmptyNames { list: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PeopleError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PeopleError>;
