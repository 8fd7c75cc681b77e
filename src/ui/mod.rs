pub mod components;
pub mod navigation;
pub mod screens;
pub mod styles;

pub use components::TerminalGuard;
pub use navigation::{MenuAction, UiRoute};
pub use screens::{run_calculator, run_catalog, run_main_menu};
