//! Local record actions.
//!
//! Every action mutates the screen's in-memory collection only.

pub mod stories;
pub mod users;

pub use stories::*;
pub use users::*;
