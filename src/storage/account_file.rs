use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::ensure_parent_dir;
use super::models::AccountRecord;

/// Append-only log of registered accounts.
#[derive(Debug, Clone)]
pub struct AccountFile {
    path: PathBuf,
}

impl AccountFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens, appends one record and closes the file.
    pub fn append(&self, record: &AccountRecord) -> Result<(), StorageError> {
        let unavailable = |err| StorageError::unavailable(&self.path, err);

        ensure_parent_dir(&self.path).map_err(unavailable)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(unavailable)?;
        writeln!(file, "{}", record.to_line()).map_err(unavailable)?;

        log::debug!("Appended account {} to {}", record.username, self.path.display());
        Ok(())
    }

    /// Reads every `(username, password)` pair in file order.
    ///
    /// Tokens are split on any whitespace and consumed two at a time, so line
    /// boundaries do not matter. A missing file is an empty log.
    pub fn load(&self) -> Result<Vec<AccountRecord>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::unavailable(&self.path, err)),
        };

        let mut tokens = content.split_whitespace();
        let mut records = Vec::new();
        while let Some(username) = tokens.next() {
            match tokens.next() {
                Some(password) => records.push(AccountRecord::new(username, password)),
                None => log::warn!(
                    "Ignoring unpaired token `{username}` at the end of {}",
                    self.path.display()
                ),
            }
        }

        Ok(records)
    }
}
