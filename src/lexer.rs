use tracing::trace;

use crate::{
    char_cursor_ext::CharCursorExt,
    cursor::StrCursor,
    error::ExprError,
    span::SpanUntil,
    token::{
        Munch, MunchIdentifier, MunchInteger, MunchOperator, MunchWhitespace, Munched, Tok, Token,
    },
};

type BoxedMunch<'a> = Box<dyn Munch<Token = Token, Cursor = StrCursor<'a>> + 'a>;

const DEFAULT_REASON: &str = "expected an integer literal or one of `+`, `-`";

/// Splits an expression into significant tokens, dropping whitespace
///
/// Yields at most one error, after which the lexer is exhausted.
pub struct Lexer<'a> {
    head: Option<StrCursor<'a>>,
    /// order determines munching priority, integers come before operators so `-5` is a literal
    munchers: [BoxedMunch<'a>; 4],
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            head: StrCursor::start(src),
            munchers: [
                Box::new(MunchWhitespace::<StrCursor<'a>>::new()),
                Box::new(MunchInteger::<StrCursor<'a>>::new()),
                Box::new(MunchOperator::<StrCursor<'a>>::new()),
                Box::new(MunchIdentifier::<StrCursor<'a>>::new()),
            ],
        }
    }

    fn invalid(&mut self, cursor: &StrCursor<'a>, errors: String) -> ExprError {
        let (token, next) = cursor.word();
        let span = cursor.span_until(next.as_ref());
        self.head = None;

        ExprError::InvalidToken {
            token,
            span,
            reason: if errors.is_empty() {
                DEFAULT_REASON.into()
            } else {
                errors
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ExprError>;

    fn next(&mut self) -> Option<Self::Item> {
        'scan: loop {
            let cursor = self.head?;
            let mut errors = String::new();

            for muncher in &self.munchers {
                match muncher.munch(&cursor) {
                    Munched::Some(token, next) => {
                        self.head = next;
                        if token.tok == Tok::Whitespace {
                            continue 'scan;
                        }
                        trace!(?token, "munched");
                        return Some(Ok(token));
                    }
                    Munched::Err(e) => {
                        if !errors.is_empty() {
                            errors.push_str("; ");
                        }
                        errors.push_str(&e);
                    }
                    Munched::None => {}
                }
            }

            return Some(Err(self.invalid(&cursor, errors)));
        }
    }
}

/// tokenize the whole of `src`, stopping at the first invalid token
pub fn tokenize(src: &str) -> Result<Vec<Token>, ExprError> {
    Lexer::new(src).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::BinaryOperation, span::Span};

    fn toks(src: &str) -> Vec<Tok> {
        tokenize(src).unwrap().into_iter().map(|t| t.tok).collect()
    }

    #[test]
    fn test_tokenize_chain() {
        assert_eq!(
            toks("10 + 2 - 5"),
            vec![
                Tok::Integer(10),
                Tok::Operator(BinaryOperation::Add),
                Tok::Integer(2),
                Tok::Operator(BinaryOperation::Sub),
                Tok::Integer(5),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("  12 -  -3").unwrap();
        let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
        assert_eq!(spans, vec![Span::new(2, 4), Span::new(5, 6), Span::new(8, 10)]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(toks("").is_empty());
        assert!(toks(" \t\n").is_empty());
    }

    #[test]
    fn test_invalid_word() {
        let err = tokenize("10 # 2").unwrap_err();
        assert_eq!(
            err,
            ExprError::InvalidToken {
                token: "#".into(),
                span: Span::new(3, 4),
                reason: DEFAULT_REASON.into(),
            }
        );
    }

    #[test]
    fn test_reasons_from_munchers() {
        match tokenize("1 * 2").unwrap_err() {
            ExprError::InvalidToken { token, reason, .. } => {
                assert_eq!(token, "*");
                assert!(reason.contains("unsupported operator"));
            }
            e => panic!("unexpected error {e:?}"),
        }

        match tokenize("x + 1").unwrap_err() {
            ExprError::InvalidToken { token, reason, .. } => {
                assert_eq!(token, "x");
                assert!(reason.contains("variables are not supported"));
            }
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[test]
    fn test_lexer_stops_after_error() {
        let mut lexer = Lexer::new("1 ? 2");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }
}
