//! Whitespace-separated token stream with `#` comments.

use alloc::format;
use alloc::string::String;

use crate::error::PnmError;

/// Cursor over PBM/PGM text. Tracks the 1-based line number for error
/// messages.
pub(crate) struct TokenReader<'a> {
    data: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> TokenReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            line: 1,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
        }
        Some(byte)
    }

    /// Skip whitespace and comments. A comment runs from `#` to the end of
    /// its line.
    fn skip_blanks(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if byte.is_ascii_whitespace() {
                self.bump();
            } else if byte == b'#' {
                while let Some(b) = self.bump() {
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_blanks();
        let data = self.data;
        let start = self.pos;
        let len = data[start..]
            .iter()
            .position(|&b| b.is_ascii_whitespace() || b == b'#')
            .unwrap_or(data.len() - start);
        self.pos += len;
        (len > 0).then(|| &data[start..start + len])
    }

    /// Next header token, failing with `InvalidHeader` naming `what` when
    /// the input runs out.
    pub(crate) fn header_token(&mut self, what: &str) -> Result<&'a [u8], PnmError> {
        self.next_token().ok_or_else(|| {
            PnmError::InvalidHeader(format!("missing {what} at line {}", self.line))
        })
    }

    /// Parse the next header token as a non-negative decimal integer.
    pub(crate) fn header_uint(&mut self, what: &str) -> Result<usize, PnmError> {
        let token = self.header_token(what)?;
        parse_uint(token).ok_or_else(|| {
            PnmError::InvalidHeader(format!(
                "line {}: expected {what}, found {:?}",
                self.line,
                lossy(token)
            ))
        })
    }

    /// Consume the single whitespace byte that ends a binary header.
    pub(crate) fn end_binary_header(&mut self) -> Result<(), PnmError> {
        match self.bump() {
            Some(b) if b.is_ascii_whitespace() => Ok(()),
            Some(b) => Err(PnmError::InvalidHeader(format!(
                "line {}: expected whitespace before raster data, found byte {b:#04x}",
                self.line
            ))),
            None => Err(PnmError::UnexpectedEof),
        }
    }
}

/// Strict decimal parse: ASCII digits only, no sign, no overflow.
pub(crate) fn parse_uint(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0usize, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(usize::from(b - b'0'))
    })
}

pub(crate) fn lossy(token: &[u8]) -> String {
    String::from_utf8_lossy(token).into()
}
