//! Error types for expression evaluation

use std::num::ParseFloatError;

use thiserror::Error;

use crate::token::Token;

/// Errors raised while turning raw input into tokens.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A character that is not a digit, decimal point, whitespace,
    /// operator or parenthesis.
    #[error("invalid input character: {0:?}")]
    InvalidChar(char),

    /// An accumulated numeric literal that does not parse as a float.
    #[error("invalid number {literal:?}: {source}")]
    InvalidNumber {
        /// The accumulated digits and decimal points
        literal: String,
        /// Underlying parse failure
        #[source]
        source: ParseFloatError,
    },

    /// The input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// Reading from the underlying stream failed.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Contract violation: `pop`, `peek` or `shift` on an empty [`Stack`](crate::Stack).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{op} called on an empty stack")]
pub struct StackUnderflow {
    /// The stack operation that was attempted
    pub op: &'static str,
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad character or malformed numeric literal
    Scan,
    /// Closing parenthesis without a matching opening one
    UnbalancedParenthesis,
    /// Too few operands for an operator, or nothing left at the end
    EmptyStack,
    /// Division by exactly zero
    DivisionByZero,
    /// A token no rule accepts in its position
    UnexpectedToken,
    /// Broken internal invariant
    Internal,
}

/// Main error type for evaluation.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The input could not be tokenized
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ScanError),

    /// A closing parenthesis with no open parenthesis on the operator buffer
    #[error("invalid input: unbalanced parenthesis")]
    UnbalancedParenthesis,

    /// Not enough operands available
    #[error("empty stack")]
    EmptyStack,

    /// The divisor was zero
    #[error("division by zero")]
    DivisionByZero,

    /// A token reached a stage that cannot handle it
    #[error("invalid input: unexpected token: {0}")]
    UnexpectedToken(Token),

    /// A stack was misused by the pipeline itself
    #[error("internal error: {0}")]
    Internal(#[from] StackUnderflow),
}

impl EvalError {
    /// The kind of this error, for matching without inspecting payloads.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidInput(_) => ErrorKind::Scan,
            EvalError::UnbalancedParenthesis => ErrorKind::UnbalancedParenthesis,
            EvalError::EmptyStack => ErrorKind::EmptyStack,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::UnexpectedToken(_) => ErrorKind::UnexpectedToken,
            EvalError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns true for errors caused by the input text rather than by
    /// arithmetic.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Scan | ErrorKind::UnbalancedParenthesis | ErrorKind::UnexpectedToken
        )
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
