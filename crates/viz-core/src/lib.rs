//! Shared foundations for the Superstore chart generator.
//!
//! Holds the sales data model, the error type used across all crates,
//! the CLI settings and number-formatting helpers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, VizError};
