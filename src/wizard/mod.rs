//! Add-trek wizard: form state, step validation and publishing.

pub mod form;
pub mod validation;
#[allow(clippy::module_inception)]
pub mod wizard;

#[cfg(test)]
pub(crate) mod test_support;

pub use form::*;
pub use validation::*;
pub use wizard::*;
