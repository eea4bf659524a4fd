use std::io::{self, Write};

use crate::accounts::AccountStore;
use crate::common::Message;
use crate::error::{AuthError, SendError, StorageError};
use crate::storage::TranscriptFile;

use super::history::ChatHistory;
use super::user::User;

/// The room never holds more than two active participants.
pub const MAX_PARTICIPANTS: usize = 2;

const HISTORY_HEADER: &str = "Chat History:";
const HISTORY_RULE: &str = "-------------------------";

/// State for one process run: the account store, the shared history and the
/// users currently in the chat.
pub struct ChatRoom {
    accounts: AccountStore,
    history: ChatHistory,
    participants: Vec<String>,
    transcript: TranscriptFile,
}

impl ChatRoom {
    pub fn new(accounts: AccountStore, transcript: TranscriptFile) -> Self {
        Self {
            accounts,
            history: ChatHistory::new(),
            participants: Vec::new(),
            transcript,
        }
    }

    /// Check `supplied_password` against the stored account and connect `user`.
    ///
    /// Every join is a fresh credential check. A username appears at most once in
    /// the participant list. On failure `user` is left as it was.
    pub fn join(&mut self, user: &mut User, supplied_password: &str) -> Result<(), AuthError> {
        if !self.accounts.validate(user.username(), supplied_password) {
            log::warn!("Rejected credentials for {}", user.username());
            return Err(AuthError::InvalidCredentials);
        }
        if self.participants.iter().any(|p| p == user.username()) {
            return Err(AuthError::AlreadyJoined(user.username().to_string()));
        }
        if self.participants.len() >= MAX_PARTICIPANTS {
            return Err(AuthError::SessionFull(self.participants.len()));
        }

        user.set_connected(true);
        if let Err(err) = self.accounts.set_online(user.username(), true) {
            log::error!("Account vanished during join: {err}");
        }
        self.participants.push(user.username().to_string());

        log::info!("{} joined the chat", user.username());
        Ok(())
    }

    /// Disconnect `user` and mark its account offline. Safe to call more than once.
    pub fn leave(&mut self, user: &mut User) {
        user.set_connected(false);
        if let Err(err) = self.accounts.set_online(user.username(), false) {
            log::debug!("Leave without a matching account: {err}");
        }
        if let Some(index) = self.participants.iter().position(|p| p == user.username()) {
            self.participants.remove(index);
        }

        log::info!("{} left the chat", user.username());
    }

    pub fn record_message(&mut self, user: &User, content: &str) -> Result<Message, SendError> {
        user.send_message(content, &mut self.history)
    }

    /// Console lines for every message, in send order.
    pub fn history_lines(&self) -> Vec<String> {
        self.history.iter().map(Message::display).collect()
    }

    pub fn display_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{HISTORY_HEADER}")?;
        for line in self.history_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{HISTORY_RULE}")
    }

    /// Append the whole in-memory history to the transcript file.
    ///
    /// Not idempotent: a second call within the same run writes every message again.
    pub fn export_history(&self) -> Result<usize, StorageError> {
        let written = self
            .transcript
            .append_lines(self.history.iter().map(Message::render_for_file))?;
        log::info!(
            "Appended {written} messages to {}",
            self.transcript.path().display()
        );
        Ok(written)
    }

    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn accounts_mut(&mut self) -> &mut AccountStore {
        &mut self.accounts
    }

    pub fn transcript(&self) -> &TranscriptFile {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AccountFile;
    use std::fs;
    use tempfile::TempDir;

    fn room_with_accounts(dir: &TempDir) -> ChatRoom {
        let mut accounts = AccountStore::open(AccountFile::new(dir.path().join("users.txt")));
        accounts.register("alice", "pw1").unwrap();
        accounts.register("bob", "pw2").unwrap();
        ChatRoom::new(accounts, TranscriptFile::new(dir.path().join("chat.txt")))
    }

    #[test]
    fn join_connects_user_and_marks_account_online() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "pw1");

        room.join(&mut alice, "pw1").unwrap();

        assert!(alice.is_connected());
        assert_eq!(room.accounts().is_online("alice"), Some(true));
        assert_eq!(room.participants(), ["alice"]);
    }

    #[test]
    fn wrong_password_keeps_user_out() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "nope");

        assert_eq!(room.join(&mut alice, "nope"), Err(AuthError::InvalidCredentials));
        assert!(!alice.is_connected());
        assert!(room.participants().is_empty());
        assert_eq!(room.accounts().is_online("alice"), Some(false));

        assert!(room.record_message(&alice, "hi").is_err());
        assert_eq!(room.message_count(), 0);
    }

    #[test]
    fn unknown_user_is_invalid_credentials() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut ghost = User::new("ghost", "pw1");

        assert_eq!(room.join(&mut ghost, "pw1"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn third_participant_is_refused() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        room.accounts_mut().register("carol", "pw3").unwrap();
        let mut alice = User::new("alice", "pw1");
        let mut bob = User::new("bob", "pw2");
        let mut carol = User::new("carol", "pw3");

        room.join(&mut alice, "pw1").unwrap();
        room.join(&mut bob, "pw2").unwrap();
        assert_eq!(room.join(&mut carol, "pw3"), Err(AuthError::SessionFull(2)));
        assert!(!carol.is_connected());

        room.leave(&mut bob);
        room.join(&mut carol, "pw3").unwrap();
        assert_eq!(room.participants(), ["alice", "carol"]);
    }

    #[test]
    fn username_joins_at_most_once() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "pw1");
        let mut alice_again = User::new("alice", "pw1");
        let mut bob = User::new("bob", "pw2");
        room.join(&mut alice, "pw1").unwrap();

        let already = Err(AuthError::AlreadyJoined("alice".to_string()));
        assert_eq!(room.join(&mut alice, "pw1"), already);
        assert_eq!(room.join(&mut alice_again, "pw1"), already);
        assert!(!alice_again.is_connected());
        assert_eq!(room.participants(), ["alice"]);

        room.join(&mut bob, "pw2").unwrap();
        assert_eq!(room.participants(), ["alice", "bob"]);

        room.leave(&mut alice);
        room.join(&mut alice_again, "pw1").unwrap();
        assert_eq!(room.participants(), ["bob", "alice"]);
    }

    #[test]
    fn leave_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "pw1");
        room.join(&mut alice, "pw1").unwrap();

        room.leave(&mut alice);
        room.leave(&mut alice);

        assert!(!alice.is_connected());
        assert_eq!(room.accounts().is_online("alice"), Some(false));
        assert!(room.participants().is_empty());
        assert!(room.record_message(&alice, "late").is_err());
    }

    #[test]
    fn history_lists_messages_in_send_order() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "pw1");
        let mut bob = User::new("bob", "pw2");
        room.join(&mut alice, "pw1").unwrap();
        room.join(&mut bob, "pw2").unwrap();

        for (user, text) in [(&alice, "1"), (&bob, "2"), (&alice, "3"), (&bob, "4")] {
            room.record_message(user, text).unwrap();
        }

        let lines = room.history_lines();
        assert_eq!(lines.len(), 4);
        for (line, (sender, text)) in lines.iter().zip([("alice", "1"), ("bob", "2"), ("alice", "3"), ("bob", "4")]) {
            assert!(line.starts_with(&format!("[{sender} - ")), "{line}");
            assert!(line.ends_with(&format!("] {text}")), "{line}");
        }

        let mut out = Vec::new();
        room.display_history(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Chat History:\n"));
        assert!(text.ends_with("-------------------------\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn export_twice_duplicates_transcript() {
        let dir = TempDir::new().unwrap();
        let mut room = room_with_accounts(&dir);
        let mut alice = User::new("alice", "pw1");
        let mut bob = User::new("bob", "pw2");
        room.join(&mut alice, "pw1").unwrap();
        room.join(&mut bob, "pw2").unwrap();
        room.record_message(&alice, "hi\nthere").unwrap();
        room.record_message(&bob, "bye").unwrap();

        assert_eq!(room.export_history().unwrap(), 2);
        assert_eq!(room.export_history().unwrap(), 2);

        let content = fs::read_to_string(room.transcript().path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[1], lines[3]);
        assert!(lines[0].ends_with("] hi there"));
    }

    #[test]
    fn export_to_unwritable_path_fails() {
        let dir = TempDir::new().unwrap();
        let accounts = AccountStore::new(AccountFile::new(dir.path().join("users.txt")));
        let room = ChatRoom::new(accounts, TranscriptFile::new(dir.path()));

        assert!(matches!(
            room.export_history(),
            Err(StorageError::Unavailable { .. })
        ));
    }
}
