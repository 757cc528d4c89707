mod variants;

pub use variants::*;

use crate::{ast::BinaryOperation, span::Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    Whitespace,
    Integer(i32),
    Operator(BinaryOperation),
}

/// A [`Tok`] along with the bytes of the expression it was munched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub tok: Tok,
    pub span: Span,
}

impl Token {
    pub fn new(tok: Tok, span: Span) -> Self {
        Self { tok, span }
    }
}

/// The result of a [`Munch::munch`] operation
pub enum Munched<Token, Cursor> {
    /// Indicates that the munch operation succeeded and produced a `Token` as well as the next
    /// cursor, if one exists
    Some(Token, Option<Cursor>),
    /// Indicates that the munch operation recognised the input but found it invalid, with a
    /// short string explaining why.
    ///
    /// The message should contain only a one line description of what went wrong, e.g.:
    ///     - integer literal out of range
    ///     - unsupported operator
    ///
    /// **remarks:** may be shadowed if another muncher succeeds on the same cursor
    Err(String),
    /// Indicates that no error occurred, but no valid token was created
    None,
}

/// represents an object which "munches" on a [`Cursor`](crate::cursor::Cursor) stream
pub trait Munch {
    type Token;
    type Cursor;

    fn munch(&self, cursor: &Self::Cursor) -> Munched<Self::Token, Self::Cursor>;
}
