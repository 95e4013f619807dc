//! Contribution-margin calculator and its display formatters.

pub mod calculator;
pub mod format;

pub use calculator::{compute_margin, SimulationInput, SimulationResult};
pub use format::{format_currency, format_hours, format_percentage};
