pub mod commands;
pub mod types;

pub use commands::MenuChoice;
pub use types::{Message, MessageContent};
