use std::fmt::{self, Display};

use crate::cursor::Cursor;

/// Byte range `start..end` into an expression string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// spans are only measured forward from a cursor, see [`SpanUntil`], so `end >= start`
    pub(crate) fn new(start: usize, end: usize) -> Self {
        assert!(end >= start);

        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn byte_len(&self) -> usize {
        self.end - self.start
    }

    /// the text this span covers in `src`, or `None` if the span does not fit `src`
    pub fn slice<'a>(&self, src: &'a str) -> Option<&'a str> {
        src.get(self.start..self.end)
    }
}

/// A [`Cursor`] which knows its byte position and can measure the distance to a later cursor
pub trait SpanUntil: Cursor {
    /// create a span from `self` (inclusive) up to `next` (exclusive), where `None` means the end
    /// of the source
    fn span_until(&self, next: Option<&Self>) -> Span;
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;

    #[test]
    fn test_slice() {
        let span = Span::new(3, 5);
        assert_eq!(span.slice("10 + 2"), Some("+ "));
        assert_eq!(span.byte_len(), 2);
        assert_eq!(Span::new(4, 9).slice("10 + 2"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(0, 2).to_string(), "0..2");
    }

    #[test]
    fn test_spans_measured_from_cursors_run_forward() {
        let src = "10 + é - 3";
        let mut head = StrCursor::start(src);
        while let Some(cursor) = head {
            let next = cursor.next();
            let span = cursor.span_until(next.as_ref());
            assert!(span.end() > span.start());
            assert_eq!(span.slice(src).map(|s| s.chars().count()), Some(1));
            assert_eq!(cursor.span_until(None).end(), src.len());
            head = next;
        }
    }

    #[test]
    #[should_panic]
    fn test_negative_length_panics() {
        let _ = Span::new(2, 1);
    }
}
