//! Lazy read views over a `TriList`.
//!
//! Both views borrow the list's storage and pipelines. Nothing is transformed
//! until an item is pulled, and a view always sees the pipelines as they are
//! when it is created: edits need `&mut TriList`, which the borrow rules keep
//! out while a view is alive. Cloning a view restarts nothing; it forks the
//! cursor, and each clone recomputes its own items.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice;

use tri_list_pipeline::{Pipeline, PipelineTable};
use tri_list_primitives::{Element, Index, Variant};

/// Every stored value in insertion order, each through its own pipeline.
///
/// Created by [`TriList::iter`](crate::TriList::iter).
pub struct Iter<'a, A, B, C> {
    elements: slice::Iter<'a, Element<A, B, C>>,
    pipelines: &'a PipelineTable<A, B, C>,
}

impl<'a, A, B, C> Iter<'a, A, B, C> {
    pub(crate) fn new(
        elements: &'a [Element<A, B, C>],
        pipelines: &'a PipelineTable<A, B, C>,
    ) -> Self {
        Self {
            elements: elements.iter(),
            pipelines,
        }
    }
}

impl<A, B, C> Clone for Iter<'_, A, B, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            pipelines: self.pipelines,
        }
    }
}

impl<A, B, C> Iterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    type Item = Element<A, B, C>;

    fn next(&mut self) -> Option<Self::Item> {
        let pipelines = self.pipelines;
        self.elements.next().map(|e| pipelines.apply(e.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        // skipped elements are never transformed
        let pipelines = self.pipelines;
        self.elements.nth(n).map(|e| pipelines.apply(e.clone()))
    }
}

impl<A, B, C> DoubleEndedIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let pipelines = self.pipelines;
        self.elements.next_back().map(|e| pipelines.apply(e.clone()))
    }
}

impl<A, B, C> ExactSizeIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
}

impl<A, B, C> FusedIterator for Iter<'_, A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
}

/// Values inserted as `T`, through `T`'s pipeline.
///
/// Filtering happens on the tag before any transformation, so the pipeline
/// runs once per yielded value and never on values of other types.
///
/// Created by [`TriList::range_over`](crate::TriList::range_over).
pub struct RangeOver<'a, A, B, C, T, I> {
    elements: slice::Iter<'a, Element<A, B, C>>,
    pipeline: &'a Pipeline<T>,
    _index: PhantomData<fn() -> I>,
}

impl<'a, A, B, C, T, I> RangeOver<'a, A, B, C, T, I> {
    pub(crate) fn new(elements: &'a [Element<A, B, C>], pipeline: &'a Pipeline<T>) -> Self {
        Self {
            elements: elements.iter(),
            pipeline,
            _index: PhantomData,
        }
    }
}

impl<A, B, C, T, I> Clone for RangeOver<'_, A, B, C, T, I> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            pipeline: self.pipeline,
            _index: PhantomData,
        }
    }
}

impl<'a, A, B, C, T, I> Iterator for RangeOver<'a, A, B, C, T, I>
where
    T: Variant<A, B, C, I> + Clone + 'static,
    I: Index,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.elements.find_map(T::from_element_ref)?;
        Some(self.pipeline.apply(value.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

impl<'a, A, B, C, T, I> DoubleEndedIterator for RangeOver<'a, A, B, C, T, I>
where
    T: Variant<A, B, C, I> + Clone + 'static,
    I: Index,
{
    fn next_back(&mut self) -> Option<T> {
        let value = self.elements.by_ref().rev().find_map(T::from_element_ref)?;
        Some(self.pipeline.apply(value.clone()))
    }
}

impl<'a, A, B, C, T, I> FusedIterator for RangeOver<'a, A, B, C, T, I>
where
    T: Variant<A, B, C, I> + Clone + 'static,
    I: Index,
{
}
