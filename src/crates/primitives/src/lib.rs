//! Building blocks shared by the tri-list crates.
//!
//! - [`Element`]: a value tagged with which of three declared types it is.
//! - [`Variant`]: the trait that ties a concrete type to its position, checked
//!   entirely at compile time.
//! - [`TagMismatch`]: the error for runtime extraction of the wrong type.

pub mod element;
pub mod error;
pub mod variant;

pub use element::{Element, Tag};
pub use error::TagMismatch;
pub use variant::{First, Index, Second, Third, Variant};
