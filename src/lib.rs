//! Append-only list over three distinct types, with per-type pipelines.
//!
//! A [`TriList<A, B, C>`] stores values of exactly three declared types,
//! each tagged with the type it was pushed as. Every type also owns a
//! transformation pipeline that is composed with [`TriList::modify_only`],
//! cleared with [`TriList::reset`], and applied only when values are read:
//!
//! - [`TriList::iter`] yields every value in insertion order as an
//!   [`Element`], each through its own type's pipeline.
//! - [`TriList::range_over`] yields only the values of one type, through
//!   that type's pipeline.
//!
//! Stored values are never modified. Using a type that is not one of the
//! three, or declaring the same type twice and then addressing it, fails to
//! compile rather than at runtime.
//!
//! # Example
//!
//! ```
//! use tri_list::{Element, TriList};
//!
//! let mut list = TriList::<i32, String, f64>::new();
//! list.push(1);
//! list.push("a".to_string());
//! list.push(2);
//!
//! list.modify_only::<i32, _>(|x| x * 10);
//! list.modify_only::<i32, _>(|x| x + 1);
//! assert_eq!(
//!     list.iter().collect::<Vec<_>>(),
//!     vec![Element::First(11), Element::Second("a".to_string()), Element::First(21)],
//! );
//! ```

pub mod list;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod tests;
pub mod view;

pub use list::TriList;
pub use view::{Iter, RangeOver};

pub use tri_list_pipeline::{Pipeline, PipelineTable, Slot};
pub use tri_list_primitives::{Element, First, Index, Second, Tag, TagMismatch, Third, Variant};
