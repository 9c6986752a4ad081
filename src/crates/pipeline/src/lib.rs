//! Per-type transformation pipelines for tri-list.
//!
//! A [`Pipeline<T>`] is a single stored `T -> T` function that grows by
//! composition and shrinks only by a full reset. A [`PipelineTable`] holds one
//! pipeline for each of three declared types and hands out a slot only to the
//! type that owns it (see [`Slot`]).
//!
//! Pipelines are never run eagerly: composing stores the closure, and the
//! owner decides when to [`apply`](Pipeline::apply) it.
//!
//! # Example
//!
//! ```
//! use tri_list_pipeline::PipelineTable;
//! use tri_list_primitives::Element;
//!
//! let mut table = PipelineTable::<i32, String, f64>::new();
//! table.compose::<i32, _, _>(|x| x * 10);
//! table.compose::<i32, _, _>(|x| x + 1);
//!
//! assert_eq!(table.apply(Element::First(1)), Element::First(11));
//! assert_eq!(table.apply(Element::Third(1.0)), Element::Third(1.0));
//! ```

pub mod stage;
pub mod table;

pub use stage::Pipeline;
pub use table::{PipelineTable, Slot};
