use std::marker::PhantomData;

use unicode_id_start::{is_id_continue, is_id_start};

use crate::{
    char_cursor_ext::CharCursorExt,
    token::{Munch, Munched, Token},
};

/// Recognises identifier-like words so they can be rejected with a useful message
///
/// An identifier begins with either `_` or a character with the `XID_Start` unicode property,
/// and continues with characters with the `XID_Continue` unicode property. This muncher never
/// produces a token, the grammar has no variables.
pub struct MunchIdentifier<C> {
    _marker: PhantomData<C>,
}

impl<C> MunchIdentifier<C> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<C> Default for MunchIdentifier<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Munch for MunchIdentifier<C>
where
    C: CharCursorExt,
{
    type Token = Token;
    type Cursor = C;

    fn munch(&self, cursor: &Self::Cursor) -> Munched<Self::Token, Self::Cursor> {
        let data = cursor.data();

        if data != '_' && !is_id_start(data) {
            return Munched::None;
        }

        let (name, _) = cursor.take_while(is_id_continue);

        Munched::Err(format!("found identifier `{name}`, variables are not supported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::StrCursor;

    fn munch(src: &str) -> Munched<Token, StrCursor<'_>> {
        let cursor = StrCursor::start(src).unwrap();
        MunchIdentifier::<StrCursor>::new().munch(&cursor)
    }

    #[test]
    fn test_identifier_is_rejected() {
        match munch("x1+y") {
            Munched::Err(e) => assert!(e.contains("`x1`")),
            _ => panic!("expected identifier error"),
        }
        assert!(matches!(munch("_tmp"), Munched::Err(_)));
        assert!(matches!(munch("число"), Munched::Err(_)));
    }

    #[test]
    fn test_non_identifier_is_none() {
        assert!(matches!(munch("10"), Munched::None));
        assert!(matches!(munch("*"), Munched::None));
    }
}
