//! Infix to postfix conversion
//!
//! [`Postfix`] implements Dijkstra's shunting-yard algorithm as a lazy
//! iterator. It pulls infix tokens one at a time and hands them back in
//! reverse Polish order, holding only two buffers:
//!
//! - an output buffer (FIFO) of tokens ready to be yielded
//! - an operator buffer (LIFO) of operators and open parentheses whose
//!   position is not settled yet
//!
//! Tokens that produce nothing to yield (`(`, `)`, operators) are handled in
//! a loop rather than by re-entering `next`, so long runs of them cost no
//! call stack.

use std::io::Read;

use crate::context::EvalContext;
use crate::error::{EvalError, Result, ScanError};
use crate::stack::Stack;
use crate::token::{Operator, Token};
use crate::tokenizer::Tokenizer;

/// Lazy infix-to-postfix converter over a token source.
///
/// # Example
///
/// ```
/// use rpncalc::{format_postfix, to_postfix, EvalContext};
///
/// let rpn = to_postfix("2+3*(4-5)".as_bytes(), &EvalContext::default());
/// assert_eq!(format_postfix(rpn).unwrap(), "2 3 4 5 - * +");
/// ```
pub struct Postfix<I> {
    tokens: I,
    output: Stack<Token>,
    operators: Stack<Token>,
    strict_parentheses: bool,
    input_done: bool,
    finished: bool,
}

impl<I> Postfix<I>
where
    I: Iterator<Item = std::result::Result<Token, ScanError>>,
{
    /// Create a converter pulling infix tokens from `tokens`.
    pub fn new(tokens: I, ctx: &EvalContext) -> Self {
        Self {
            tokens,
            output: Stack::with_capacity(64),
            operators: Stack::with_capacity(64),
            strict_parentheses: ctx.strict_parentheses,
            input_done: false,
            finished: false,
        }
    }

    /// Number of operators and open parentheses waiting on the operator
    /// buffer.
    pub fn operator_depth(&self) -> usize {
        self.operators.len()
    }

    fn advance(&mut self) -> Result<Option<Token>> {
        loop {
            if !self.output.is_empty() {
                return Ok(Some(self.output.shift()?));
            }
            if self.input_done {
                return Ok(None);
            }

            let tok = match self.tokens.next() {
                Some(tok) => tok?,
                None => {
                    self.input_done = true;
                    self.drain_operators()?;
                    continue;
                }
            };

            match tok {
                Token::Number(_) => return Ok(Some(tok)),
                Token::LParen => self.operators.push(tok),
                Token::RParen => self.close_paren()?,
                Token::Operator(op) => self.push_operator(op)?,
            }
        }
    }

    /// Move operators to the output until the matching `(` is popped.
    fn close_paren(&mut self) -> Result<()> {
        loop {
            if self.operators.is_empty() {
                return Err(EvalError::UnbalancedParenthesis);
            }
            let top = self.operators.pop()?;
            if matches!(top, Token::LParen) {
                return Ok(());
            }
            self.output.push(top);
        }
    }

    /// Pop every stacked operator binding at least as tightly as `op`, then
    /// stack `op`. Popping on equal precedence makes operators left-associative.
    fn push_operator(&mut self, op: Operator) -> Result<()> {
        while !self.operators.is_empty() {
            let top = *self.operators.peek()?;
            if matches!(top, Token::LParen) || top.precedence() < op.precedence() {
                break;
            }
            self.output.push(self.operators.pop()?);
        }
        self.operators.push(Token::Operator(op));
        Ok(())
    }

    fn drain_operators(&mut self) -> Result<()> {
        while !self.operators.is_empty() {
            let tok = self.operators.pop()?;
            if self.strict_parentheses && matches!(tok, Token::LParen) {
                return Err(EvalError::UnbalancedParenthesis);
            }
            self.output.push(tok);
        }
        Ok(())
    }
}

impl<I> Iterator for Postfix<I>
where
    I: Iterator<Item = std::result::Result<Token, ScanError>>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.advance() {
            Ok(Some(tok)) => Some(Ok(tok)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<I> std::iter::FusedIterator for Postfix<I> where
    I: Iterator<Item = std::result::Result<Token, ScanError>>
{
}

/// Tokenize `reader` and convert it to postfix in one lazy pipeline.
pub fn to_postfix<R: Read>(reader: R, ctx: &EvalContext) -> Postfix<Tokenizer<R>> {
    Postfix::new(Tokenizer::new(reader), ctx)
}

/// Render a postfix token stream as space-separated text.
///
/// Stops at, and returns, the first error in the stream.
pub fn format_postfix<I>(tokens: I) -> Result<String>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut out = String::new();
    for tok in tokens {
        let tok = tok?;
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&tok.to_string());
    }
    Ok(out)
}
