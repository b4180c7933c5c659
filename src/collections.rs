pub mod bst_set;

pub use bst_set::{BstSet, Cursor, IntoIter, Iter, Key, Position};

use std::fmt;

/// The error type for cursor misuse, returned by [`Cursor`] methods and [`BstSet::erase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorError {
    pub(crate) kind: CursorErrorKind,
}

impl CursorError {
    pub(crate) const fn new(kind: CursorErrorKind) -> Self {
        Self { kind }
    }

    /// Details about the misuse that caused the error
    #[must_use]
    pub fn kind(&self) -> CursorErrorKind {
        self.kind
    }
}

/// Details of the misuse that caused a `CursorError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorErrorKind {
    /// Key requested from the end position.
    DerefEnd,

    /// Cursor advanced from the end position.
    NextAtEnd,

    /// Cursor moved back from the first element ( or on an empty set ).
    PrevAtBegin,

    /// Erase called with the end position.
    EraseEnd,

    /// Position refers to an element that has since been removed.
    Stale,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            CursorErrorKind::DerefEnd => "key requested at end position",
            CursorErrorKind::NextAtEnd => "cursor advanced past end",
            CursorErrorKind::PrevAtBegin => "cursor moved before first element",
            CursorErrorKind::EraseEnd => "erase at end position",
            CursorErrorKind::Stale => "position refers to a removed element",
        })
    }
}

impl std::error::Error for CursorError {}
