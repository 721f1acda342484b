//! Pipeline orchestration module.
//!
//! Listing pipeline that coordinates, per screen:
//! - The in-memory collection store
//! - Predicate filtering
//! - Sorting
//! - Page slicing

pub mod collection;
pub mod context;
pub mod listing;

pub use collection::*;
pub use context::*;
pub use listing::*;
