use std::fmt;

use crate::element::Tag;

/// An element was asked for a type other than the one it was inserted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMismatch {
    pub expected: Tag,
    pub found: Tag,
}

impl fmt::Display for TagMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tag mismatch: expected {} type, found {} type",
            self.expected, self.found
        )
    }
}

impl std::error::Error for TagMismatch {}
