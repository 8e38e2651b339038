// src/error.rs

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("table `{0}` has no header row")]
    MissingHeaders(String),

    #[error("unknown column `{column}` in table `{table}`")]
    UnknownColumn { table: String, column: String },

    #[error("enter a keyword or select at least one filter")]
    NoFilters,

    #[error("no awards table loaded")]
    NoAwards,

    #[error("nothing to export")]
    NothingToExport,

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    /// Attach the offending path to an I/O error.
    pub fn file(path: &Path, source: io::Error) -> Self {
        Error::File { path: path.to_path_buf(), source }
    }

    pub fn unknown_column(table: &str, column: &str) -> Self {
        Error::UnknownColumn { table: s!(table), column: s!(column) }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
