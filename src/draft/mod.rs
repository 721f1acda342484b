//! Draft persistence module.
//!
//! Keeps an in-progress form safe across reloads:
//! - Storage port with memory and file backends
//! - JSON save/restore under a fixed key
//! - Debounced background autosave

pub mod debounce;
pub mod persistence;
pub mod storage;

pub use debounce::*;
pub use persistence::*;
pub use storage::*;
