use std::path::PathBuf;
use thiserror::Error;

/// I/O-level failures. Problems inside the script's comments are never errors;
/// affected entities are dropped instead.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a regular file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("file {} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("file {} is not readable: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
