//! Tagged values over three declared types.
//!
//! An `Element<A, B, C>` is the unit of storage: one value together with the
//! position (`Tag`) of the type it was inserted as. The tag is fixed by the
//! variant, so it can never drift from the payload.

use std::fmt;

use crate::error::TagMismatch;
use crate::variant::{Index, Variant};

/// Discriminant of an [`Element`], i.e. which declared type a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    First,
    Second,
    Third,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::First, Tag::Second, Tag::Third];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::First => write!(f, "first"),
            Tag::Second => write!(f, "second"),
            Tag::Third => write!(f, "third"),
        }
    }
}

/// A value of exactly one of the declared types `A`, `B` or `C`.
///
/// Prefer [`Element::new`] over naming the variant directly: it picks the
/// variant from the value's type, and refuses types that are not declared.
///
/// ```
/// use tri_list_primitives::{Element, Tag};
///
/// let e: Element<i32, String, f64> = Element::new(String::from("a"));
/// assert_eq!(e.tag(), Tag::Second);
/// assert_eq!(e.get::<String, _>().map(String::as_str), Some("a"));
/// assert_eq!(e.get::<i32, _>(), None);
/// ```
///
/// A type that is not one of the three is rejected at compile time:
///
/// ```compile_fail
/// use tri_list_primitives::Element;
///
/// let e: Element<i32, String, f64> = Element::new(1u8);
/// ```
///
/// So is a type that is declared twice, since its position is ambiguous:
///
/// ```compile_fail
/// use tri_list_primitives::Element;
///
/// let e: Element<i32, i32, f64> = Element::new(1i32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A, B, C> Element<A, B, C> {
    /// Wrap `value` into the variant of its declared type.
    pub fn new<T, I>(value: T) -> Self
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        value.into_element()
    }

    pub fn tag(&self) -> Tag {
        match self {
            Element::First(_) => Tag::First,
            Element::Second(_) => Tag::Second,
            Element::Third(_) => Tag::Third,
        }
    }

    /// True if this element was inserted as a `T`.
    pub fn is<T, I>(&self) -> bool
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        self.tag() == I::TAG
    }

    /// Borrow the payload if this element was inserted as a `T`.
    pub fn get<T, I>(&self) -> Option<&T>
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        T::from_element_ref(self)
    }

    /// Take the payload out, failing if the element carries another type.
    pub fn try_into_value<T, I>(self) -> Result<T, TagMismatch>
    where
        T: Variant<A, B, C, I>,
        I: Index,
    {
        let found = self.tag();
        T::from_element(self).ok_or(TagMismatch {
            expected: I::TAG,
            found,
        })
    }

    /// Apply the function matching this element's tag, keeping the tag.
    pub fn map<A2, B2, C2>(
        self,
        first: impl FnOnce(A) -> A2,
        second: impl FnOnce(B) -> B2,
        third: impl FnOnce(C) -> C2,
    ) -> Element<A2, B2, C2> {
        match self {
            Element::First(a) => Element::First(first(a)),
            Element::Second(b) => Element::Second(second(b)),
            Element::Third(c) => Element::Third(third(c)),
        }
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Element<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::First(a) => write!(f, "{}", a),
            Element::Second(b) => write!(f, "{}", b),
            Element::Third(c) => write!(f, "{}", c),
        }
    }
}
