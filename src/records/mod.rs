//! Record module.
//!
//! The three collections the app lists (treks, stories, users), their
//! typed field enumerations, and the sample data each screen loads.

pub mod catalog;
pub mod fields;
pub mod story;
pub mod trek;
pub mod user;

pub use catalog::*;
pub use fields::*;
pub use story::*;
pub use trek::*;
pub use user::*;
