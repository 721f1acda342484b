//! Trek detail helpers.

pub mod itinerary;

pub use itinerary::*;
