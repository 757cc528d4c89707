use std::cmp::Ordering;

use crate::span::{Span, SpanUntil};

/// represents a seek operation for traversing a source with [`Cursor::seek`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seek {
    /// Seek left-ward towards the beginning of the source
    Left(usize),
    /// Seek right-ward towards the end of the source
    Right(usize),
}

/// Cheaply clonable representation of a single element in some stream of items.
///
/// A cursor always refers to a valid element, the end of the stream is represented by the
/// absence of a cursor (`None`) rather than a cursor past the last element.
pub trait Cursor: Clone + Sized {
    type Item;

    /// Get the data associated with this cursor
    fn data(&self) -> Self::Item;

    /// Get a [`Cursor`] at a position relative to this one, or [`None`], indicating that no such
    /// cursor exists. Seeking past either end of the source yields [`None`].
    fn seek(&self, op: Seek) -> Option<Self>;

    fn next(&self) -> Option<Self> {
        self.seek(Seek::Right(1))
    }
}

/// Cursor over the chars of an in-memory expression string
///
/// `pos` is a byte offset and always sits on a char boundary of `src`
#[derive(Clone, Copy)]
pub struct StrCursor<'a> {
    src: &'a str,
    pos: usize,
}

impl std::fmt::Debug for StrCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrCursor")
            .field("pos", &self.pos)
            .field("data", &self.data())
            .finish()
    }
}

impl PartialEq for StrCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.src, other.src) && self.pos == other.pos
    }
}

impl Eq for StrCursor<'_> {}

impl PartialOrd for StrCursor<'_> {
    /// cursors into two different sources are not comparable
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !std::ptr::eq(self.src, other.src) {
            None
        } else {
            self.pos.partial_cmp(&other.pos)
        }
    }
}

impl<'a> StrCursor<'a> {
    /// get a cursor at the first char of `src`, or `None` if `src` is empty
    pub fn start(src: &'a str) -> Option<Self> {
        if src.is_empty() {
            None
        } else {
            Some(Self { src, pos: 0 })
        }
    }

    /// get the byte position of this cursor
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Cursor for StrCursor<'_> {
    type Item = char;

    fn data(&self) -> char {
        // pos is kept on a char boundary strictly inside src
        self.src[self.pos..].chars().next().unwrap_or_default()
    }

    fn seek(&self, op: Seek) -> Option<Self> {
        let pos = match op {
            Seek::Right(n) => self.pos + self.src[self.pos..].char_indices().nth(n)?.0,
            Seek::Left(0) => self.pos,
            Seek::Left(n) => self.src[..self.pos].char_indices().rev().nth(n - 1)?.0,
        };

        Some(Self { src: self.src, pos })
    }
}

impl SpanUntil for StrCursor<'_> {
    fn span_until(&self, next: Option<&Self>) -> Span {
        let end = next.map_or(self.src.len(), |n| n.pos);
        Span::new(self.pos, end)
    }
}
