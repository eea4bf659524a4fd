//! Error types for accounts, sessions and flat-file storage.

use std::path::PathBuf;

use thiserror::Error;

/// A durable file could not be opened, read or appended to.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("unable to open {} ({source})", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Unavailable {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("username `{0}` already exists")]
    DuplicateUsername(String),

    #[error("no account named `{0}`")]
    UnknownUser(String),

    /// The account is registered in memory but its durable copy was not written.
    #[error("account saved for this run only: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0} is already in the chat")]
    AlreadyJoined(String),

    #[error("the chat already has {0} participants")]
    SessionFull(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SendError {
    #[error("user {0} is not connected")]
    NotConnected(String),
}
