//! Numeric models backing the analytics services.

pub mod regression;

pub use regression::{ModelError, SeasonalTrendModel};
