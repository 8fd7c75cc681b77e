pub mod bootstrap;
pub mod commands;
pub mod controller;
pub mod state;

pub use bootstrap::run;
pub use state::CalculatorState;
