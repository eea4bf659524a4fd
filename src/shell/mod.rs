pub mod app;
pub mod input;

pub use app::ChatShell;
pub use input::ConsoleInput;
