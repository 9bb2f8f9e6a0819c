//! # rpncalc
//!
//! A streaming evaluator for arithmetic expressions.
//!
//! Expressions use numbers, `+ - * /`, parentheses and the usual
//! precedence rules. Input is read from any [`std::io::Read`] and passes
//! through three lazy stages, each pulling one item at a time from the
//! previous one:
//!
//! ```text
//! bytes → [Tokenizer] → infix tokens → [Postfix] → postfix tokens → [Evaluator] → f64
//! ```
//!
//! No stage materializes the input or the token stream, so memory grows
//! with parenthesis nesting depth rather than with expression length.
//!
//! ## Example
//!
//! ```
//! use rpncalc::{evaluate_str, ErrorKind};
//!
//! assert_eq!(evaluate_str("2+3*(4-5)").unwrap(), -1.0);
//! assert_eq!(evaluate_str("2/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod postfix;
pub mod stack;
pub mod token;
pub mod tokenizer;

// Re-export main types
pub use context::EvalContext;
pub use error::{ErrorKind, EvalError, Result, ScanError, StackUnderflow};
pub use eval::{evaluate, evaluate_str, evaluate_with, Evaluator};
pub use postfix::{format_postfix, to_postfix, Postfix};
pub use stack::Stack;
pub use token::{Operator, Token};
pub use tokenizer::Tokenizer;

/// rpncalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_repeated_evaluation_is_bit_identical() {
        let src = "38034 - 172.432 * 16864 / 45030 - 162 / (663.45532 * 535)";
        let first = evaluate_str(src).unwrap();
        let second = evaluate_str(src).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
