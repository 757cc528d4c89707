use std::marker::PhantomData;

use crate::{
    char_cursor_ext::CharCursorExt,
    span::SpanUntil,
    token::{Munch, Munched, Tok, Token},
};

/// Munches a contiguous run of characters contained within the Unicode Whitespace set.
///
/// Whitespace only separates tokens, the lexer drops the resulting [`Tok::Whitespace`].
pub struct MunchWhitespace<C> {
    _marker: PhantomData<C>,
}

impl<C> MunchWhitespace<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for MunchWhitespace<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Munch for MunchWhitespace<C>
where
    C: SpanUntil<Item = char>,
{
    type Token = Token;
    type Cursor = C;

    fn munch(&self, cursor: &Self::Cursor) -> Munched<Self::Token, Self::Cursor> {
        if !cursor.data().is_whitespace() {
            return Munched::None;
        }

        // don't advance past head, it is the first non-whitespace character
        let (_, head) = cursor.take_while(char::is_whitespace);
        let span = cursor.span_until(head.as_ref());

        Munched::Some(Token::new(Tok::Whitespace, span), head)
    }
}
