use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;

use super::ensure_parent_dir;

/// Append-only transcript, one message per line.
#[derive(Debug, Clone)]
pub struct TranscriptFile {
    path: PathBuf,
}

impl TranscriptFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends every line in one open/write/close cycle.
    pub fn append_lines<I, S>(&self, lines: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unavailable = |err| StorageError::unavailable(&self.path, err);

        ensure_parent_dir(&self.path).map_err(unavailable)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(unavailable)?;

        let mut writer = BufWriter::new(file);
        let mut written = 0;
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(unavailable)?;
            written += 1;
        }
        writer.flush().map_err(unavailable)?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn appends_after_existing_content() {
        let dir = TempDir::new().unwrap();
        let transcript = TranscriptFile::new(dir.path().join("chat_history.txt"));

        assert_eq!(transcript.append_lines(["one", "two"]).unwrap(), 2);
        assert_eq!(transcript.append_lines(vec!["three".to_string()]).unwrap(), 1);

        let content = fs::read_to_string(transcript.path()).unwrap();
        assert_eq!(content, "one\ntwo\nthree\n");
    }

    #[test]
    fn empty_batch_still_creates_file() {
        let dir = TempDir::new().unwrap();
        let transcript = TranscriptFile::new(dir.path().join("chat_history.txt"));

        assert_eq!(transcript.append_lines(Vec::<String>::new()).unwrap(), 0);
        assert!(transcript.path().exists());
    }
}
