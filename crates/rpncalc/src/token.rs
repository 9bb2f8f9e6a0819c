//! Lexical tokens shared by every pipeline stage

use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Binding strength used by the shunting-yard converter.
    ///
    /// All operators are left-associative, so an operator on the buffer is
    /// popped whenever its precedence is greater than *or equal to* the
    /// incoming one.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// The source character for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Classify a character as an operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One lexical unit of an expression.
///
/// Tokens carry no source position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal.
    Number(f64),

    /// A binary operator.
    Operator(Operator),

    /// `(`
    LParen,

    /// `)`
    RParen,
}

impl Token {
    /// Precedence of this token on the operator buffer.
    ///
    /// Parentheses rank above every operator, but the converter never
    /// compares them: popping always stops at an opening parenthesis.
    pub fn precedence(&self) -> u8 {
        match self {
            Token::Operator(op) => op.precedence(),
            Token::LParen | Token::RParen => 3,
            Token::Number(_) => 0,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
