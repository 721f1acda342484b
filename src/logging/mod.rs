//! Structured logging with view context.
//!
//! Provides logging macros and utilities that include view_id and screen
//! in every log message for easy correlation.

pub mod structured;

pub use structured::*;
