pub mod terminal;
pub mod utils;

pub use terminal::TerminalGuard;
