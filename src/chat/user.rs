use crate::common::Message;
use crate::error::SendError;

use super::history::ChatHistory;

/// A participant for one chat session, built from the credentials typed at the prompt.
///
/// Not the stored account: it only becomes connected after [`ChatRoom::join`]
/// checks it against one.
///
/// [`ChatRoom::join`]: super::room::ChatRoom::join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password: String,
    connected: bool,
}

impl User {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            connected: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub(crate) fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Stamp `content` with the current time and append it to `history`.
    ///
    /// A disconnected user leaves `history` untouched.
    pub fn send_message(
        &self,
        content: &str,
        history: &mut ChatHistory,
    ) -> Result<Message, SendError> {
        if !self.connected {
            return Err(SendError::NotConnected(self.username.clone()));
        }

        let message = Message::new(&self.username, content);
        history.push(message.clone());
        Ok(message)
    }
}
