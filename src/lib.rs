//! Interpreter for left-fold integer arithmetic such as `10 + 2 - 5`.
//!
//! Input is split into whitespace-delimited tokens, reduced with a stack into an immutable
//! [`Expr`] tree and evaluated with [`Expr::evaluate`].

pub mod ast;
pub mod char_cursor_ext;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod log;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{BinaryOperation, Expr, evaluate};
pub use error::{ExprError, Malformed};
pub use parser::{Notation, eval, parse, parse_with};
