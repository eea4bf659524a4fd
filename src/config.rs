use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/duo_chat.json";
pub const DEFAULT_ACCOUNTS_FILE: &str = "user_profiles.txt";
pub const DEFAULT_TRANSCRIPT_FILE: &str = "chat_history.txt";
pub const DEFAULT_SENTINEL: &str = "bye";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_accounts_file")]
    pub accounts_file: String,
    #[serde(default = "default_transcript_file")]
    pub transcript_file: String,
    /// A chat line equal to this word ends the session.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_accounts_file() -> String {
    DEFAULT_ACCOUNTS_FILE.to_string()
}

fn default_transcript_file() -> String {
    DEFAULT_TRANSCRIPT_FILE.to_string()
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accounts_file: default_accounts_file(),
            transcript_file: default_transcript_file(),
            sentinel: default_sentinel(),
        }
    }
}

/// Read the JSON config at `path`, falling back to defaults.
///
/// A missing, unreadable or malformed file is never fatal.
pub fn load_config<P: AsRef<Path>>(path: P) -> AppConfig {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No config at {}, using built-in defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            log::warn!("Cannot read config {}: {err}; using defaults", path.display());
            return AppConfig::default();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed config {}: {err}", path.display());
        AppConfig::default()
    })
}
