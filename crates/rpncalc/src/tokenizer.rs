//! Streaming tokenizer
//!
//! Turns a byte stream into [`Token`]s lazily, one character at a time.
//! Numbers are accumulated into a reusable buffer and only parsed once a
//! terminating character (or end of input) is seen, so a malformed literal
//! such as `2.3.` is reported when the buffer is flushed.

mod chars;

use std::io::Read;

use crate::error::ScanError;
use crate::token::{Operator, Token};

use chars::CharReader;

/// Lazy token source over any [`Read`] implementation.
///
/// Yields `Ok(Token)` items until the input is exhausted. After the first
/// error or the end of input, it yields `None` forever.
///
/// # Example
///
/// ```
/// use rpncalc::{Operator, Token, Tokenizer};
///
/// let tokens: Result<Vec<_>, _> = Tokenizer::new("2 + 3 * 4".as_bytes()).collect();
/// assert_eq!(
///     tokens.unwrap(),
///     vec![
///         Token::Number(2.0),
///         Token::Operator(Operator::Add),
///         Token::Number(3.0),
///         Token::Operator(Operator::Mul),
///         Token::Number(4.0),
///     ]
/// );
/// ```
pub struct Tokenizer<R> {
    chars: CharReader<R>,
    /// Digits and decimal points of the number being accumulated
    number: String,
    finished: bool,
}

impl<R: Read> Tokenizer<R> {
    /// Create a tokenizer consuming `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            chars: CharReader::new(reader),
            number: String::new(),
            finished: false,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            let c = match self.chars.next_char()? {
                Some(c) => c,
                None => return self.flush_number(),
            };

            if c.is_whitespace() {
                if self.number.is_empty() {
                    continue;
                }
                return self.flush_number();
            }

            if c.is_ascii_digit() || c == '.' {
                self.number.push(c);
                continue;
            }

            // Any other character terminates a pending number and is seen
            // again on the next call.
            if !self.number.is_empty() {
                self.chars.unread(c);
                return self.flush_number();
            }

            return classify(c).map(Some);
        }
    }

    /// Parse and clear the number buffer. `None` if nothing is pending.
    fn flush_number(&mut self) -> Result<Option<Token>, ScanError> {
        if self.number.is_empty() {
            return Ok(None);
        }

        let result = match self.number.parse::<f64>() {
            Ok(n) => Ok(Some(Token::Number(n))),
            Err(source) => Err(ScanError::InvalidNumber {
                literal: self.number.clone(),
                source,
            }),
        };
        self.number.clear();
        result
    }
}

fn classify(c: char) -> Result<Token, ScanError> {
    if let Some(op) = Operator::from_char(c) {
        return Ok(Token::Operator(op));
    }
    match c {
        '(' => Ok(Token::LParen),
        ')' => Ok(Token::RParen),
        _ => Err(ScanError::InvalidChar(c)),
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.scan() {
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

impl<R: Read> std::iter::FusedIterator for Tokenizer<R> {}
