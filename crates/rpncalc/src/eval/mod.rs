//! Postfix evaluation

pub mod binary;

use std::io::Read;

use log::{debug, trace};

use crate::context::EvalContext;
use crate::error::{EvalError, Result};
use crate::postfix::to_postfix;
use crate::stack::Stack;
use crate::token::Token;

/// Reduces a postfix token stream to a single value with an operand stack.
///
/// An evaluator lives for exactly one pass: [`run`](Evaluator::run)
/// consumes it.
pub struct Evaluator<'a> {
    ctx: &'a EvalContext,
    operands: Stack<f64>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with an empty operand stack.
    pub fn new(ctx: &'a EvalContext) -> Self {
        Self {
            ctx,
            operands: Stack::with_capacity(64),
        }
    }

    /// Pull every token from `postfix` and return the value left on top of
    /// the operand stack.
    ///
    /// The first error, whether raised upstream or here, ends evaluation.
    pub fn run<I>(mut self, postfix: I) -> Result<f64>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        let mut consumed = 0usize;

        for tok in postfix {
            let tok = tok?;
            consumed += 1;
            if self.ctx.trace {
                trace!("token {}: {} (stack depth {})", consumed, tok, self.operands.len());
            }
            self.step(tok)?;
        }

        debug!("consumed {} postfix tokens", consumed);

        if self.operands.is_empty() {
            return Err(EvalError::EmptyStack);
        }
        Ok(self.operands.pop()?)
    }

    fn step(&mut self, tok: Token) -> Result<()> {
        match tok {
            Token::Number(n) => {
                self.operands.push(n);
                Ok(())
            }
            Token::Operator(op) => {
                if self.operands.len() < 2 {
                    return Err(EvalError::EmptyStack);
                }
                let rhs = self.operands.pop()?;
                let lhs = self.operands.pop()?;
                let value = binary::apply(op, lhs, rhs)?;
                if self.ctx.trace {
                    trace!("{} {} {} = {}", lhs, op, rhs, value);
                }
                self.operands.push(value);
                Ok(())
            }
            Token::LParen | Token::RParen => Err(EvalError::UnexpectedToken(tok)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate the expression read from `reader` with default settings.
///
/// # Example
///
/// ```
/// let value = rpncalc::evaluate("8 / 2 * (2 + 2)".as_bytes()).unwrap();
/// assert_eq!(value, 16.0);
/// ```
pub fn evaluate<R: Read>(reader: R) -> Result<f64> {
    evaluate_with(reader, &EvalContext::default())
}

/// Evaluate the expression read from `reader` under `ctx`.
pub fn evaluate_with<R: Read>(reader: R, ctx: &EvalContext) -> Result<f64> {
    debug!("evaluating (strict_parentheses = {})", ctx.strict_parentheses);
    let result = Evaluator::new(ctx).run(to_postfix(reader, ctx));
    match &result {
        Ok(value) => debug!("evaluated to {}", value),
        Err(e) => debug!("evaluation failed: {}", e),
    }
    result
}

/// Evaluate an in-memory expression with default settings.
pub fn evaluate_str(input: &str) -> Result<f64> {
    evaluate(input.as_bytes())
}
