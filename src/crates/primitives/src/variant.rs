//! Compile-time membership of a type among the three declared ones.
//!
//! Every typed operation takes a pair `<T, I>` where `I` is one of the index
//! markers below. `I` is always inferred: for a declared type exactly one
//! `Variant` impl applies, so the compiler can pick it. A type that is not
//! declared has no impl at all, and a type declared twice has two candidate
//! impls, so in both cases the call does not compile.

use crate::element::{Element, Tag};

/// Index marker for the first declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First;

/// Index marker for the second declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Second;

/// Index marker for the third declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Third;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::First {}
    impl Sealed for super::Second {}
    impl Sealed for super::Third {}

    pub trait SealedVariant<A, B, C, I> {}

    impl<A, B, C> SealedVariant<A, B, C, super::First> for A {}
    impl<A, B, C> SealedVariant<A, B, C, super::Second> for B {}
    impl<A, B, C> SealedVariant<A, B, C, super::Third> for C {}
}

/// A position among the three declared types.
pub trait Index: sealed::Sealed + 'static {
    const TAG: Tag;
}

impl Index for First {
    const TAG: Tag = Tag::First;
}

impl Index for Second {
    const TAG: Tag = Tag::Second;
}

impl Index for Third {
    const TAG: Tag = Tag::Third;
}

/// `Self` is the declared type at position `I` of `(A, B, C)`.
///
/// Implemented exactly three times, once per position, and sealed.
pub trait Variant<A, B, C, I: Index>: Sized + sealed::SealedVariant<A, B, C, I> {
    fn into_element(self) -> Element<A, B, C>;

    fn from_element(element: Element<A, B, C>) -> Option<Self>;

    fn from_element_ref(element: &Element<A, B, C>) -> Option<&Self>;
}

impl<A, B, C> Variant<A, B, C, First> for A {
    fn into_element(self) -> Element<A, B, C> {
        Element::First(self)
    }

    fn from_element(element: Element<A, B, C>) -> Option<Self> {
        match element {
            Element::First(a) => Some(a),
            _ => None,
        }
    }

    fn from_element_ref(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::First(a) => Some(a),
            _ => None,
        }
    }
}

impl<A, B, C> Variant<A, B, C, Second> for B {
    fn into_element(self) -> Element<A, B, C> {
        Element::Second(self)
    }

    fn from_element(element: Element<A, B, C>) -> Option<Self> {
        match element {
            Element::Second(b) => Some(b),
            _ => None,
        }
    }

    fn from_element_ref(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::Second(b) => Some(b),
            _ => None,
        }
    }
}

impl<A, B, C> Variant<A, B, C, Third> for C {
    fn into_element(self) -> Element<A, B, C> {
        Element::Third(self)
    }

    fn from_element(element: Element<A, B, C>) -> Option<Self> {
        match element {
            Element::Third(c) => Some(c),
            _ => None,
        }
    }

    fn from_element_ref(element: &Element<A, B, C>) -> Option<&Self> {
        match element {
            Element::Third(c) => Some(c),
            _ => None,
        }
    }
}
