use thiserror::Error;

use crate::{ast::BinaryOperation, span::Span};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("Malformed expression: {0}")]
    MalformedExpression(#[from] Malformed),

    #[error("Invalid token `{token}` at {span}: {reason}")]
    InvalidToken {
        token: String,
        span: Span,
        reason: String,
    },
}

/// Reasons a token stream cannot reduce to exactly one expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("expression is empty")]
    Empty,

    #[error("operator `{0}` at {1} has no left operand")]
    MissingLeftOperand(BinaryOperation, Span),

    #[error("operator `{0}` at {1} has no right operand")]
    MissingRightOperand(BinaryOperation, Span),

    #[error("{0} operands remain after reduction, expected exactly one")]
    LeftoverOperands(usize),
}

impl ExprError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, ExprError::MalformedExpression(_))
    }

    pub fn is_invalid_token(&self) -> bool {
        matches!(self, ExprError::InvalidToken { .. })
    }
}
