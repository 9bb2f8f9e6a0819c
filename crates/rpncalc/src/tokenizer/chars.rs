//! Character-at-a-time UTF-8 decoding with one character of push-back

use std::io::{self, BufRead, BufReader, Read};

use crate::error::ScanError;

/// Decodes characters from a byte stream one at a time.
///
/// Holds at most one unread character; the stream itself is only ever
/// consumed forwards.
pub(crate) struct CharReader<R> {
    inner: BufReader<R>,
    pushed_back: Option<char>,
}

impl<R: Read> CharReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            pushed_back: None,
        }
    }

    /// Read the next character, or `None` at end of input.
    pub(crate) fn next_char(&mut self) -> Result<Option<char>, ScanError> {
        if let Some(c) = self.pushed_back.take() {
            return Ok(Some(c));
        }

        let lead = match self.next_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let width = utf8_width(lead).ok_or(ScanError::InvalidUtf8)?;
        let mut buf = [lead, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or(ScanError::InvalidUtf8)?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(ScanError::InvalidUtf8)
    }

    /// Push `c` back so the next call to `next_char` returns it.
    ///
    /// Only one character may be pending at a time.
    pub(crate) fn unread(&mut self, c: char) {
        debug_assert!(self.pushed_back.is_none(), "only one character may be unread");
        self.pushed_back = Some(c);
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    let byte = buf.first().copied();
                    if byte.is_some() {
                        self.inner.consume(1);
                    }
                    return Ok(byte);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Encoded length of a UTF-8 sequence from its leading byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
