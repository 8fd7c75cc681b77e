pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod ui;
pub mod utils;

pub use error::{AppError, Result};
pub use estimator::{
    estimate, estimate_with, ComplexityTier, EstimateResult, ProjectCategory, TechnologySelection,
};
