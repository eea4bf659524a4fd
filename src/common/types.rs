use chrono::{DateTime, Local};

/// Prefix that turns a chat line into an ASCII art message.
pub const ASCII_ART_PREFIX: &str = "/ascii ";

/// ctime-style timestamp, e.g. `Sat Oct 18 09:41:07 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Message body, classified once when the message is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Plain(String),
    /// Holds the art body, without the `/ascii ` prefix.
    AsciiArt(String),
}

impl MessageContent {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(ASCII_ART_PREFIX) {
            Some(body) => MessageContent::AsciiArt(body.to_string()),
            None => MessageContent::Plain(raw.to_string()),
        }
    }

    /// The text exactly as the sender typed it.
    pub fn raw(&self) -> String {
        match self {
            MessageContent::Plain(text) => text.clone(),
            MessageContent::AsciiArt(body) => format!("{ASCII_ART_PREFIX}{body}"),
        }
    }
}

/// A chat line with its sender and send time. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    sender: String,
    content: MessageContent,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn new(sender: &str, content: &str) -> Self {
        Self::with_timestamp(sender, content, Local::now())
    }

    pub fn with_timestamp(sender: &str, content: &str, timestamp: DateTime<Local>) -> Self {
        Self {
            sender: sender.to_string(),
            content: MessageContent::parse(content),
            timestamp,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &MessageContent {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn human_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn is_ascii_art(&self) -> bool {
        matches!(self.content, MessageContent::AsciiArt(_))
    }

    pub fn ascii_body(&self) -> Option<&str> {
        match &self.content {
            MessageContent::AsciiArt(body) => Some(body),
            MessageContent::Plain(_) => None,
        }
    }

    /// `[<sender> - <timestamp>] <content>`
    pub fn render(&self) -> String {
        format!(
            "[{} - {}] {}",
            self.sender,
            self.human_timestamp(),
            self.content.raw()
        )
    }

    /// Same as [`Message::render`], folded onto a single physical line.
    pub fn render_for_file(&self) -> String {
        self.render()
            .chars()
            .map(|c| if is_line_break(c) { ' ' } else { c })
            .collect()
    }

    /// Console form. ASCII art gets a header line and its body below it.
    pub fn display(&self) -> String {
        match &self.content {
            MessageContent::Plain(_) => self.render(),
            MessageContent::AsciiArt(body) => format!(
                "[{} - {}] ASCII Art Message:\n{}",
                self.sender,
                self.human_timestamp(),
                body
            ),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
