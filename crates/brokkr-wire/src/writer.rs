// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Assemble Brokkr wire buffers through reserve/commit appends.
// Author: Lukas Bower

//! Growable append-only writer for wire buffers.

use uuid::Uuid;

use crate::ident::encode_ident;
use crate::types::{WireError, IDENT_WIRE_LEN};
use crate::varint;

/// Growable output buffer assembling wire bytes.
///
/// Every typed write reserves a region at the logical end, fills it, and
/// commits exactly that many bytes, so arena growth stays transparent to
/// callers. A region handed out by [`reserve`](Self::reserve) is only valid
/// until the next write; callers must not hold it across further appends.
///
/// The single random-access exception is
/// [`patch_u32_at`](Self::patch_u32_at), which overwrites a previously
/// committed 4-byte span — the record-batch checksum field.
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    arena: Vec<u8>,
    len: usize,
}

impl WireWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with `capacity` bytes preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of committed bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no bytes have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View the committed bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.arena[..self.len]
    }

    /// Consume the writer and return the committed bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.arena.truncate(self.len);
        self.arena
    }

    /// Reserve a writable region of exactly `n` bytes at the logical end,
    /// growing the arena as needed.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        let end = self.len.checked_add(n).expect("arena length overflow");
        if end > self.arena.len() {
            self.arena.resize(end, 0);
        }
        &mut self.arena[self.len..end]
    }

    /// Extend the logical length over `n` previously reserved bytes.
    pub fn commit(&mut self, n: usize) {
        debug_assert!(
            self.len + n <= self.arena.len(),
            "commit past reserved region"
        );
        self.len += n;
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.reserve(1)[0] = value;
        self.commit(1);
    }

    /// Append `value` as a big-endian 16-bit integer.
    pub fn write_i16(&mut self, value: i16) {
        self.reserve(2).copy_from_slice(&value.to_be_bytes());
        self.commit(2);
    }

    /// Append `value` as a big-endian 32-bit integer.
    pub fn write_i32(&mut self, value: i32) {
        self.reserve(4).copy_from_slice(&value.to_be_bytes());
        self.commit(4);
    }

    /// Append `value` as a big-endian unsigned 32-bit integer.
    pub fn write_u32(&mut self, value: u32) {
        self.reserve(4).copy_from_slice(&value.to_be_bytes());
        self.commit(4);
    }

    /// Append `value` as a big-endian 64-bit integer.
    pub fn write_i64(&mut self, value: i64) {
        self.reserve(8).copy_from_slice(&value.to_be_bytes());
        self.commit(8);
    }

    /// Append raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len()).copy_from_slice(bytes);
        self.commit(bytes.len());
    }

    /// Append the UTF-8 bytes of `value` without a length prefix; the
    /// surrounding protocol supplies the length elsewhere.
    pub fn write_string(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    /// Append the canonical 16-byte wire form of a record identifier.
    pub fn write_ident(&mut self, id: Uuid) {
        let wire = encode_ident(id);
        self.reserve(IDENT_WIRE_LEN).copy_from_slice(&wire);
        self.commit(IDENT_WIRE_LEN);
    }

    /// Append `value` as a zig-zag signed varint.
    pub fn write_varint(&mut self, value: i32) {
        self.write_uvarint(varint::zigzag(value));
    }

    /// Append `value` as an unsigned base-128 varint.
    pub fn write_uvarint(&mut self, value: u32) {
        let n = varint::encoded_len(value);
        let span = self.reserve(n);
        varint::encode_into(value, span);
        self.commit(n);
    }

    /// Overwrite 4 previously committed bytes at `offset` with a big-endian
    /// unsigned 32-bit value.
    ///
    /// Fails with [`WireError::OutOfRange`] when the target range was not
    /// committed earlier in this buffer.
    pub fn patch_u32_at(&mut self, offset: usize, value: u32) -> Result<(), WireError> {
        let end = offset.saturating_add(4);
        if end > self.len {
            return Err(WireError::OutOfRange {
                start: offset,
                end,
                len: self.len,
            });
        }
        self.arena[offset..end].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}
