use std::{marker::PhantomData, num::IntErrorKind};

use crate::{
    char_cursor_ext::CharCursorExt,
    span::SpanUntil,
    token::{Munch, Munched, Tok, Token},
};

/// Munches a base-10 integer literal, optionally preceeded by a sign (`+` or `-`)
///
/// The literal must fill the whole whitespace-delimited word, `10+2` is not split into three
/// tokens. Literals must fit in an `i32`.
pub struct MunchInteger<C> {
    _marker: PhantomData<C>,
}

impl<C> MunchInteger<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for MunchInteger<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// true if `word` looks like it was meant to be a number: a digit, or a sign followed by one
fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix(['+', '-']).unwrap_or(word);
    digits.starts_with(|c: char| c.is_ascii_digit())
}

impl<C> Munch for MunchInteger<C>
where
    C: SpanUntil<Item = char>,
{
    type Token = Token;
    type Cursor = C;

    fn munch(&self, cursor: &Self::Cursor) -> Munched<Self::Token, Self::Cursor> {
        let (word, head) = cursor.word();

        if !looks_numeric(&word) {
            return Munched::None;
        }

        match word.parse::<i32>() {
            Ok(n) => {
                let span = cursor.span_until(head.as_ref());
                Munched::Some(Token::new(Tok::Integer(n), span), head)
            }
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Munched::Err("integer literal out of range for a 32-bit integer".into())
            }
            Err(_) => Munched::Err("malformed integer literal".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::StrCursor, span::Span};

    fn munch(src: &str) -> Munched<Token, StrCursor<'_>> {
        let cursor = StrCursor::start(src).unwrap();
        MunchInteger::<StrCursor>::new().munch(&cursor)
    }

    #[test]
    fn test_unsigned() {
        match munch("10 + 2") {
            Munched::Some(tok, Some(next)) => {
                assert_eq!(tok, Token::new(Tok::Integer(10), Span::new(0, 2)));
                assert_eq!(next.pos(), 2);
            }
            _ => panic!("expected integer"),
        }
    }

    #[test]
    fn test_signed() {
        assert!(matches!(
            munch("-17"),
            Munched::Some(Token { tok: Tok::Integer(-17), .. }, None)
        ));
        assert!(matches!(
            munch("+4"),
            Munched::Some(Token { tok: Tok::Integer(4), .. }, None)
        ));
    }

    #[test]
    fn test_bare_sign_is_not_a_literal() {
        assert!(matches!(munch("- 3"), Munched::None));
        assert!(matches!(munch("+"), Munched::None));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(munch("2147483648"), Munched::Err(_)));
        assert!(matches!(
            munch("-2147483648"),
            Munched::Some(Token { tok: Tok::Integer(i32::MIN), .. }, None)
        ));
    }

    #[test]
    fn test_trailing_garbage() {
        assert!(matches!(munch("10+2"), Munched::Err(_)));
        assert!(matches!(munch("x1"), Munched::None));
    }
}
