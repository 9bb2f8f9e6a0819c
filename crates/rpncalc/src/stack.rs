//! Buffer-backed stack shared by the converter and the evaluator

use std::collections::VecDeque;

use crate::error::StackUnderflow;

/// An ordered buffer that is pushed and popped at its tail and can also be
/// drained from its head.
///
/// `pop`, `peek` and `shift` report a [`StackUnderflow`] on an empty stack.
/// Callers are expected to check [`is_empty`](Stack::is_empty) first, so an
/// underflow always indicates a bug in the caller.
///
/// # Example
///
/// ```
/// use rpncalc::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Ok(&3));
/// assert_eq!(stack.pop(), Ok(3));
/// assert_eq!(stack.shift(), Ok(1));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: VecDeque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an item at the tail.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the tail item.
    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        self.items.pop_back().ok_or(StackUnderflow { op: "pop" })
    }

    /// Borrow the tail item without removing it.
    pub fn peek(&self) -> Result<&T, StackUnderflow> {
        self.items.back().ok_or(StackUnderflow { op: "peek" })
    }

    /// Remove and return the head item.
    pub fn shift(&mut self) -> Result<T, StackUnderflow> {
        self.items.pop_front().ok_or(StackUnderflow { op: "shift" })
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
