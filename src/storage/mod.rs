pub mod account_file;
pub mod models;
pub mod transcript_file;

pub use account_file::AccountFile;
pub use models::AccountRecord;
pub use transcript_file::TranscriptFile;

use std::fs;
use std::path::Path;

/// Ensure the directory holding `path` exists
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
