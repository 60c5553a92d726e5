//! Core types for the SpaceX launch records dashboard.
//!
//! Provides the launch record table (loaded once from CSV, immutable for
//! the rest of the process), the site selection type with its `"ALL"`
//! sentinel, and the two pure figure builders consumed by the dashboard
//! app and the CLI.

pub mod error;
pub mod figures;
pub mod launch;
pub mod site;

#[cfg(feature = "api")]
pub mod dataset;
