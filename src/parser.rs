use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperation, Expr},
    error::{ExprError, Malformed},
    lexer::Lexer,
    span::Span,
    token::Tok,
};

/// Where operators are written relative to their two operands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notation {
    /// `10 + 2 - 5`, each operator sits between its operands and there is no precedence, so
    /// operators fold left to right
    #[default]
    Infix,
    /// `10 2 + 5 -`, each operator follows both of its operands
    Postfix,
}

/// Pushdown of reduced expressions
///
/// Every entry is a complete tree, a `Binary` node is only pushed once both of its operands
/// have been popped.
struct Reducer {
    stack: Vec<Expr>,
    /// infix operator waiting for its right operand
    pending: Option<(BinaryOperation, Span)>,
}

impl Reducer {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            pending: None,
        }
    }

    fn push_literal(&mut self, n: i32) {
        self.stack.push(Expr::Literal(n));
        trace!(literal = n, depth = self.stack.len(), "push");
    }

    /// pop right then left and push `left op right`
    fn reduce(&mut self, op: BinaryOperation, span: Span) -> Result<(), Malformed> {
        let rhs = self
            .stack
            .pop()
            .ok_or(Malformed::MissingRightOperand(op, span))?;
        let lhs = self
            .stack
            .pop()
            .ok_or(Malformed::MissingLeftOperand(op, span))?;

        self.stack.push(Expr::binary(op, lhs, rhs));
        trace!(%op, depth = self.stack.len(), "reduce");
        Ok(())
    }

    fn shift_infix(&mut self, tok: Tok, span: Span) -> Result<(), Malformed> {
        match tok {
            Tok::Integer(n) => {
                self.push_literal(n);
                if let Some((op, op_span)) = self.pending.take() {
                    self.reduce(op, op_span)?;
                }
            }
            Tok::Operator(op) => {
                if let Some((prev, prev_span)) = self.pending {
                    return Err(Malformed::MissingRightOperand(prev, prev_span));
                }
                if self.stack.is_empty() {
                    return Err(Malformed::MissingLeftOperand(op, span));
                }
                self.pending = Some((op, span));
            }
            Tok::Whitespace => {}
        }

        Ok(())
    }

    fn shift_postfix(&mut self, tok: Tok, span: Span) -> Result<(), Malformed> {
        match tok {
            Tok::Integer(n) => self.push_literal(n),
            Tok::Operator(op) => self.reduce(op, span)?,
            Tok::Whitespace => {}
        }

        Ok(())
    }

    fn finish(mut self) -> Result<Expr, Malformed> {
        if let Some((op, span)) = self.pending {
            return Err(Malformed::MissingRightOperand(op, span));
        }

        match self.stack.len() {
            0 => Err(Malformed::Empty),
            1 => self.stack.pop().ok_or(Malformed::Empty),
            n => Err(Malformed::LeftoverOperands(n)),
        }
    }
}

/// parse a left-fold infix expression such as `10 + 2 - 5` into a tree
pub fn parse(expression: &str) -> Result<Expr, ExprError> {
    parse_with(expression, Notation::Infix)
}

/// parse `expression` written in the given [`Notation`]
pub fn parse_with(expression: &str, notation: Notation) -> Result<Expr, ExprError> {
    let mut reducer = Reducer::new();

    for token in Lexer::new(expression) {
        let token = token?;
        match notation {
            Notation::Infix => reducer.shift_infix(token.tok, token.span)?,
            Notation::Postfix => reducer.shift_postfix(token.tok, token.span)?,
        }
    }

    let expr = reducer.finish()?;
    debug!(%expr, ?notation, "parsed expression");

    Ok(expr)
}

/// parse then evaluate an infix expression
pub fn eval(expression: &str) -> Result<i32, ExprError> {
    Ok(parse(expression)?.evaluate())
}
