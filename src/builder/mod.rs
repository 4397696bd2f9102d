//! Builder API for ergonomic chart construction.
//!
//! This module provides fluent builders and macros for declaring charts
//! with minimal boilerplate while keeping the machine as validated data:
//! a misdeclared chart fails at build time with a [`BuildError`], never at
//! dispatch time.

pub mod chart;
pub mod error;
pub mod macros;
pub mod transition;

pub use chart::ChartBuilder;
pub use error::BuildError;
pub use transition::TransitionBuilder;
