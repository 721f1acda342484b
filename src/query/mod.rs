//! Query stages.
//!
//! The three stages every listing screen runs, in order:
//! - Predicate filtering
//! - Sorting by one typed field
//! - Page slicing

pub mod filter;
pub mod pager;
pub mod sort;

pub use filter::*;
pub use pager::*;
pub use sort::*;
