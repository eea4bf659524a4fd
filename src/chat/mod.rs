pub mod history;
pub mod room;
pub mod user;

pub use history::ChatHistory;
pub use room::{ChatRoom, MAX_PARTICIPANTS};
pub use user::User;
