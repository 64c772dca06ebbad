// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Consume typed fields from Brokkr wire buffers behind an explicit cursor.
// Author: Lukas Bower

//! Cursor-based reader over a fixed wire buffer.

use core::str;

use uuid::Uuid;

use crate::ident::decode_ident;
use crate::types::{WireError, IDENT_WIRE_LEN};
use crate::varint;

/// Cursor-based reader consuming typed fields from a borrowed buffer.
///
/// Every successful read advances the cursor by exactly the number of bytes
/// consumed; a failed read leaves the cursor where it was. The cursor never
/// passes the end of the buffer.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Wrap a received buffer with the cursor at its start.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor position: the next unread byte index.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the cursor has consumed the whole buffer.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    fn peek(&self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self.pos.saturating_add(n);
        if end > self.buf.len() {
            return Err(WireError::OutOfRange {
                start: self.pos,
                end,
                len: self.buf.len(),
            });
        }
        Ok(&self.buf[self.pos..end])
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let span = self.peek(n)?;
        self.pos += n;
        Ok(span)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    /// Read a big-endian 16-bit signed integer.
    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        let span = self.take(2)?;
        Ok(i16::from_be_bytes(span.try_into().expect("span length checked")))
    }

    /// Read a big-endian 32-bit signed integer.
    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let span = self.take(4)?;
        Ok(i32::from_be_bytes(span.try_into().expect("span length checked")))
    }

    /// Read a big-endian 32-bit unsigned integer, e.g. a checksum field.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let span = self.take(4)?;
        Ok(u32::from_be_bytes(span.try_into().expect("span length checked")))
    }

    /// Read a big-endian 64-bit signed integer.
    pub fn read_i64(&mut self) -> Result<i64, WireError> {
        let span = self.take(8)?;
        Ok(i64::from_be_bytes(span.try_into().expect("span length checked")))
    }

    /// Read `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.take(len)
    }

    /// Read `len` bytes and decode them as UTF-8 text.
    ///
    /// The surrounding protocol supplies the length. Malformed UTF-8 fails
    /// with [`WireError::InvalidEncoding`] rather than substituting
    /// replacement characters, and the cursor does not move.
    pub fn read_string(&mut self, len: usize) -> Result<String, WireError> {
        let span = self.peek(len)?;
        let text = str::from_utf8(span).map_err(|_| WireError::InvalidEncoding)?;
        self.pos += len;
        Ok(text.to_owned())
    }

    /// Read a 16-byte wire identifier and convert it to host form.
    pub fn read_ident(&mut self) -> Result<Uuid, WireError> {
        let span = self.take(IDENT_WIRE_LEN)?;
        let wire: [u8; IDENT_WIRE_LEN] = span.try_into().expect("span length checked");
        Ok(decode_ident(wire))
    }

    /// Read a zig-zag signed varint.
    pub fn read_varint(&mut self) -> Result<i32, WireError> {
        let (value, consumed) = varint::decode_i32(self.buf, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }

    /// Read an unsigned base-128 varint.
    pub fn read_uvarint(&mut self) -> Result<u32, WireError> {
        let (value, consumed) = varint::decode_u32(self.buf, self.pos)?;
        self.pos += consumed;
        Ok(value)
    }
}
