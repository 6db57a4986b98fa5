//! Data layer for the Superstore chart generator.
//!
//! Responsible for reading the windows-1252 CSV dataset into a
//! [`viz_core::models::SalesTable`] and deriving the three summary views
//! the charts are drawn from.

pub mod aggregator;
pub mod reader;

pub use viz_core as core;
