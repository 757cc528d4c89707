use std::marker::PhantomData;

use crate::{
    ast::BinaryOperation,
    char_cursor_ext::CharCursorExt,
    span::SpanUntil,
    token::{Munch, Munched, Tok, Token},
};

/// symbols which read as an operator but have no [`BinaryOperation`]
const UNSUPPORTED: [&str; 5] = ["*", "/", "%", "^", "="];

/// Munches a standalone `+` or `-`
pub struct MunchOperator<C> {
    _marker: PhantomData<C>,
}

impl<C> MunchOperator<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for MunchOperator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Munch for MunchOperator<C>
where
    C: SpanUntil<Item = char>,
{
    type Token = Token;
    type Cursor = C;

    fn munch(&self, cursor: &Self::Cursor) -> Munched<Self::Token, Self::Cursor> {
        let (word, head) = cursor.word();

        if let Some(op) = BinaryOperation::from_symbol(&word) {
            let span = cursor.span_until(head.as_ref());
            return Munched::Some(Token::new(Tok::Operator(op), span), head);
        }

        if UNSUPPORTED.contains(&word.as_str()) {
            return Munched::Err("unsupported operator, expected one of `+`, `-`".into());
        }

        Munched::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::StrCursor, span::Span};

    fn munch(src: &str) -> Munched<Token, StrCursor<'_>> {
        let cursor = StrCursor::start(src).unwrap();
        MunchOperator::<StrCursor>::new().munch(&cursor)
    }

    #[test]
    fn test_plus_and_minus() {
        match munch("+ 2") {
            Munched::Some(tok, Some(next)) => {
                assert_eq!(
                    tok,
                    Token::new(Tok::Operator(BinaryOperation::Add), Span::new(0, 1))
                );
                assert_eq!(next.pos(), 1);
            }
            _ => panic!("expected operator"),
        }
        assert!(matches!(
            munch("-"),
            Munched::Some(Token { tok: Tok::Operator(BinaryOperation::Sub), .. }, None)
        ));
    }

    #[test]
    fn test_unsupported_operator() {
        assert!(matches!(munch("*"), Munched::Err(_)));
    }

    #[test]
    fn test_operator_must_stand_alone() {
        assert!(matches!(munch("+-"), Munched::None));
        assert!(matches!(munch("-5"), Munched::None));
    }
}
