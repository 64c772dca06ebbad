// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Compute CRC32C checksums over explicit wire buffer ranges.
// Author: Lukas Bower

//! CRC32C (Castagnoli) checksumming for record-batch integrity fields.
//!
//! The routines operate on raw bytes only; the record layout that places the
//! checksum field ahead of the covered payload is the caller's business.
//! Standard reflected algorithm: init `0xFFFF_FFFF`, LSB-first, xorout
//! `0xFFFF_FFFF`.

use crate::types::WireError;

/// Reflected CRC32C (Castagnoli) polynomial.
const POLY_REFLECTED: u32 = 0x82F6_3B78;

#[inline]
fn update_byte(mut crc: u32, byte: u8) -> u32 {
    crc ^= u32::from(byte);
    for _ in 0..8 {
        let mask = (crc & 1).wrapping_neg() & POLY_REFLECTED;
        crc = (crc >> 1) ^ mask;
    }
    crc
}

/// CRC32C of the full slice.
#[must_use]
pub fn value(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFF_u32;
    for &byte in data {
        crc = update_byte(crc, byte);
    }
    crc ^ 0xFFFF_FFFF
}

/// Extend a previously computed checksum with more bytes, so that
/// `extend(value(a), b) == value(a || b)`.
#[must_use]
pub fn extend(initial: u32, data: &[u8]) -> u32 {
    let mut crc = initial ^ 0xFFFF_FFFF;
    for &byte in data {
        crc = update_byte(crc, byte);
    }
    crc ^ 0xFFFF_FFFF
}

/// CRC32C over `buffer[start..end)`.
///
/// Serves both producing a checksum while writing and verifying one while
/// reading. Fails with [`WireError::OutOfRange`] when `end < start` or `end`
/// passes the buffer length.
pub fn checksum_range(buffer: &[u8], start: usize, end: usize) -> Result<u32, WireError> {
    if end < start || end > buffer.len() {
        return Err(WireError::OutOfRange {
            start,
            end,
            len: buffer.len(),
        });
    }
    Ok(value(&buffer[start..end]))
}
