//! One pipeline per declared type.

use std::fmt;

use log::trace;
use tri_list_primitives::{Element, First, Index, Second, Third, Variant};

use crate::stage::Pipeline;

/// Three independent pipelines, addressed by the declared types `A`, `B`, `C`.
pub struct PipelineTable<A, B, C> {
    first: Pipeline<A>,
    second: Pipeline<B>,
    third: Pipeline<C>,
}

/// `Self` owns a slot in a `PipelineTable<A, B, C>`.
///
/// Implemented for each declared type through its [`Variant`] position, so a
/// slot can only be reached by naming its own type.
pub trait Slot<A, B, C, I: Index>: Variant<A, B, C, I> {
    fn slot(table: &PipelineTable<A, B, C>) -> &Pipeline<Self>;

    fn slot_mut(table: &mut PipelineTable<A, B, C>) -> &mut Pipeline<Self>;
}

impl<A, B, C> Slot<A, B, C, First> for A {
    fn slot(table: &PipelineTable<A, B, C>) -> &Pipeline<A> {
        &table.first
    }

    fn slot_mut(table: &mut PipelineTable<A, B, C>) -> &mut Pipeline<A> {
        &mut table.first
    }
}

impl<A, B, C> Slot<A, B, C, Second> for B {
    fn slot(table: &PipelineTable<A, B, C>) -> &Pipeline<B> {
        &table.second
    }

    fn slot_mut(table: &mut PipelineTable<A, B, C>) -> &mut Pipeline<B> {
        &mut table.second
    }
}

impl<A, B, C> Slot<A, B, C, Third> for C {
    fn slot(table: &PipelineTable<A, B, C>) -> &Pipeline<C> {
        &table.third
    }

    fn slot_mut(table: &mut PipelineTable<A, B, C>) -> &mut Pipeline<C> {
        &mut table.third
    }
}

impl<A: 'static, B: 'static, C: 'static> Default for PipelineTable<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static, B: 'static, C: 'static> PipelineTable<A, B, C> {
    /// All three slots start as identity.
    pub fn new() -> Self {
        Self {
            first: Pipeline::identity(),
            second: Pipeline::identity(),
            third: Pipeline::identity(),
        }
    }

    pub fn get<T, I>(&self) -> &Pipeline<T>
    where
        T: Slot<A, B, C, I>,
        I: Index,
    {
        T::slot(self)
    }

    /// Compose `f` after the current pipeline for `T`.
    pub fn compose<T, I, F>(&mut self, f: F)
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
        F: Fn(T) -> T + 'static,
    {
        let slot = T::slot_mut(self);
        slot.then(f);
        trace!(
            "composed {} pipeline ({}), now {} stage(s)",
            I::TAG,
            std::any::type_name::<T>(),
            slot.stages()
        );
    }

    /// Put the pipeline for `T` back to identity.
    pub fn reset<T, I>(&mut self)
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
    {
        let slot = T::slot_mut(self);
        let dropped = slot.stages();
        slot.reset();
        trace!(
            "reset {} pipeline ({}), dropped {} stage(s)",
            I::TAG,
            std::any::type_name::<T>(),
            dropped
        );
    }

    /// Run `element` through the pipeline of its own tag.
    pub fn apply(&self, element: Element<A, B, C>) -> Element<A, B, C> {
        element.map(
            |a| self.first.apply(a),
            |b| self.second.apply(b),
            |c| self.third.apply(c),
        )
    }
}

impl<A, B, C> fmt::Debug for PipelineTable<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineTable")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("third", &self.third)
            .finish()
    }
}
