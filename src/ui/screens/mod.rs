pub mod calculator;
pub mod catalog;
pub mod main_menu;

pub use calculator::{run_calculator, CalculatorView, KeyOutcome, Pane};
pub use catalog::run_catalog;
pub use main_menu::run_main_menu;
