//! The `TriList` container.

use std::any::{TypeId, type_name};
use std::fmt;

use log::debug;
use tri_list_pipeline::{PipelineTable, Slot};
use tri_list_primitives::{Element, Index, Variant};

use crate::view::{Iter, RangeOver};

/// Append-only list of values of three distinct types `A`, `B`, `C`.
///
/// Values are stored exactly as pushed. Each declared type has its own
/// pipeline, applied only when values are read back through [`iter`] or
/// [`range_over`]. Every typed method takes `<T, I>`; `I` is an index marker
/// that is always inferred and can be written as `_`.
///
/// [`iter`]: TriList::iter
/// [`range_over`]: TriList::range_over
///
/// ```
/// use tri_list::{Element, TriList};
///
/// let mut list = TriList::<i32, String, f64>::new();
/// list.push(1);
/// list.push("a".to_string());
/// list.push(2);
///
/// list.modify_only::<i32, _>(|x| x * 10);
/// let ints: Vec<i32> = list.range_over::<i32, _>().collect();
/// assert_eq!(ints, vec![10, 20]);
///
/// list.reset::<i32, _>();
/// assert_eq!(list.iter().next(), Some(Element::First(1)));
/// ```
///
/// Types outside the declared three are rejected at compile time:
///
/// ```compile_fail
/// use tri_list::TriList;
///
/// let mut list = TriList::<i32, String, f64>::new();
/// list.push(1u64);
/// ```
///
/// ```compile_fail
/// use tri_list::TriList;
///
/// let mut list = TriList::<i32, String, f64>::new();
/// list.reset::<bool, _>();
/// ```
///
/// ```compile_fail
/// use tri_list::TriList;
///
/// let list = TriList::<i32, String, f64>::new();
/// let _ = list.range_over::<bool, _>().count();
/// ```
///
/// ```compile_fail
/// use tri_list::TriList;
///
/// let mut list = TriList::<i32, String, f64>::new();
/// list.modify_only::<u32, _>(|x| x + 1);
/// ```
///
/// A type declared twice cannot be addressed by any typed method:
///
/// ```compile_fail
/// use tri_list::TriList;
///
/// let mut list = TriList::<i32, i32, f64>::new();
/// list.push(1i32);
/// ```
///
/// and such a list cannot be built at all: every constructor panics.
pub struct TriList<A, B, C> {
    elements: Vec<Element<A, B, C>>,
    pipelines: PipelineTable<A, B, C>,
}

impl<A: 'static, B: 'static, C: 'static> Default for TriList<A, B, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static, B: 'static, C: 'static> TriList<A, B, C> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Vec::with_capacity(capacity))
    }

    /// Build a list from already tagged elements, keeping their order.
    pub fn from_elements(elements: impl IntoIterator<Item = Element<A, B, C>>) -> Self {
        let elements = elements.into_iter();
        let mut list = Self::with_capacity(elements.size_hint().0);
        list.extend(elements);
        debug!("built tri-list from {} element(s)", list.len());
        list
    }

    /// Every constructor ends here.
    ///
    /// # Panics
    ///
    /// If two of `A`, `B`, `C` are the same type.
    fn from_storage(elements: Vec<Element<A, B, C>>) -> Self {
        let (a, b, c) = (TypeId::of::<A>(), TypeId::of::<B>(), TypeId::of::<C>());
        assert!(
            a != b && a != c && b != c,
            "tri-list element types must be pairwise distinct, got ({}, {}, {})",
            type_name::<A>(),
            type_name::<B>(),
            type_name::<C>()
        );
        Self {
            elements,
            pipelines: PipelineTable::new(),
        }
    }

    /// Append `value` tagged with its declared type.
    pub fn push<T, I>(&mut self, value: T)
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        self.elements.push(value.into_element());
    }

    pub fn push_element(&mut self, element: Element<A, B, C>) {
        self.elements.push(element);
    }

    /// Compose `f` after the current pipeline for `T`.
    ///
    /// Values of type `T` read afterwards come out as `f(previous(value))`.
    /// `f` is only stored here; it runs when views are consumed.
    pub fn modify_only<T, I>(&mut self, f: impl Fn(T) -> T + 'static)
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
    {
        self.pipelines.compose::<T, I, _>(f);
    }

    /// Drop every transformation registered for `T`.
    pub fn reset<T, I>(&mut self)
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
    {
        self.pipelines.reset::<T, I>();
    }

    /// Number of transformations currently composed for `T`.
    pub fn pipeline_stages<T, I>(&self) -> usize
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
    {
        self.pipelines.get::<T, I>().stages()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of stored values inserted as `T`. Looks at tags only.
    pub fn count_of<T, I>(&self) -> usize
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        self.elements.iter().filter(|e| e.tag() == I::TAG).count()
    }

    /// Every value in insertion order, each through its own type's pipeline.
    pub fn iter(&self) -> Iter<'_, A, B, C> {
        Iter::new(&self.elements, &self.pipelines)
    }

    /// Values inserted as `T`, in insertion order, through `T`'s pipeline.
    pub fn range_over<T, I>(&self) -> RangeOver<'_, A, B, C, T, I>
    where
        T: Slot<A, B, C, I> + 'static,
        I: Index,
    {
        RangeOver::new(&self.elements, self.pipelines.get::<T, I>())
    }
}

impl<A, B, C> Extend<Element<A, B, C>> for TriList<A, B, C> {
    fn extend<It: IntoIterator<Item = Element<A, B, C>>>(&mut self, iter: It) {
        self.elements.extend(iter);
    }
}

impl<A: 'static, B: 'static, C: 'static> FromIterator<Element<A, B, C>> for TriList<A, B, C> {
    fn from_iter<It: IntoIterator<Item = Element<A, B, C>>>(iter: It) -> Self {
        Self::from_elements(iter)
    }
}

impl<A: 'static, B: 'static, C: 'static> From<Vec<Element<A, B, C>>> for TriList<A, B, C> {
    fn from(elements: Vec<Element<A, B, C>>) -> Self {
        let list = Self::from_storage(elements);
        debug!("built tri-list from {} element(s)", list.len());
        list
    }
}

impl<A: 'static, B: 'static, C: 'static, const N: usize> From<[Element<A, B, C>; N]>
    for TriList<A, B, C>
{
    fn from(elements: [Element<A, B, C>; N]) -> Self {
        Self::from_elements(elements)
    }
}

impl<'a, A, B, C> IntoIterator for &'a TriList<A, B, C>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    type Item = Element<A, B, C>;
    type IntoIter = Iter<'a, A, B, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Debug, B: fmt::Debug, C: fmt::Debug> fmt::Debug for TriList<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriList")
            .field("elements", &self.elements)
            .field("pipelines", &self.pipelines)
            .finish()
    }
}
