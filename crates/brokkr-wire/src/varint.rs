// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode and decode zig-zag signed and base-128 unsigned varints.
// Author: Lukas Bower

//! Variable-length integer codecs for 32-bit values.
//!
//! Both encodings split the value into 7-bit groups, least-significant group
//! first, setting the high bit of every byte except the last. The signed
//! form first maps the value through zig-zag so small magnitudes of either
//! sign stay short on the wire. Encoders always emit the minimal form.

use crate::types::{WireError, MAX_VARINT_GROUPS};

/// Map a signed value onto the zig-zag unsigned space.
#[must_use]
pub fn zigzag(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag`].
#[must_use]
pub fn unzigzag(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Number of bytes the base-128 encoding of `value` occupies (1 to 5).
#[must_use]
pub fn encoded_len(value: u32) -> usize {
    match value {
        0..=0x7f => 1,
        0x80..=0x3fff => 2,
        0x4000..=0x001f_ffff => 3,
        0x0020_0000..=0x0fff_ffff => 4,
        _ => 5,
    }
}

/// Encode `value` as base-128 groups into `out`, returning the byte count.
///
/// `out` must hold at least [`encoded_len`] bytes for `value`.
pub fn encode_into(mut value: u32, out: &mut [u8]) -> usize {
    let mut idx = 0;
    while value & !0x7f != 0 {
        out[idx] = (value & 0x7f) as u8 | 0x80;
        idx += 1;
        value >>= 7;
    }
    out[idx] = value as u8;
    idx + 1
}

/// Decode an unsigned base-128 varint starting at `pos` in `buf`.
///
/// Returns the decoded value and the number of bytes consumed. Decoding
/// stops at the first byte without a continuation bit; payload bits of a
/// fifth group beyond the 32-bit range are truncated.
pub fn decode_u32(buf: &[u8], pos: usize) -> Result<(u32, usize), WireError> {
    let mut value = 0u32;
    let mut shift = 0u32;
    for group in 0..MAX_VARINT_GROUPS {
        let byte = *buf
            .get(pos.saturating_add(group))
            .ok_or(WireError::UnexpectedEndOfBuffer)?;
        value |= u32::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Ok((value, group + 1));
        }
        shift += 7;
    }
    Err(WireError::UnexpectedEndOfBuffer)
}

/// Decode a zig-zag signed varint starting at `pos` in `buf`.
///
/// Returns the decoded value and the number of bytes consumed.
pub fn decode_i32(buf: &[u8], pos: usize) -> Result<(i32, usize), WireError> {
    let (raw, consumed) = decode_u32(buf, pos)?;
    Ok((unzigzag(raw), consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_u32_vec(value: u32) -> Vec<u8> {
        let mut out = [0u8; MAX_VARINT_GROUPS];
        let n = encode_into(value, &mut out);
        assert_eq!(n, encoded_len(value));
        out[..n].to_vec()
    }

    #[test]
    fn zigzag_boundary_vectors() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(64), 128);
        assert_eq!(zigzag(i32::MIN), u32::MAX);
        for value in [0, -1, 1, 64, -64, i32::MIN, i32::MAX] {
            assert_eq!(unzigzag(zigzag(value)), value);
        }
    }

    #[test]
    fn signed_boundary_encodings() {
        assert_eq!(encode_u32_vec(zigzag(0)), vec![0x00]);
        assert_eq!(encode_u32_vec(zigzag(-1)), vec![0x01]);
        assert_eq!(encode_u32_vec(zigzag(64)), vec![0x80, 0x01]);
    }

    #[test]
    fn unsigned_known_vector() {
        assert_eq!(encode_u32_vec(300), vec![0xac, 0x02]);
        assert_eq!(decode_u32(&[0xac, 0x02], 0), Ok((300, 2)));
    }

    #[test]
    fn unsigned_round_trips() {
        for value in [
            0u32,
            1,
            127,
            128,
            300,
            16383,
            16384,
            0x001f_ffff,
            0x0020_0000,
            0x0fff_ffff,
            0x1000_0000,
            u32::MAX,
        ] {
            let bytes = encode_u32_vec(value);
            assert_eq!(decode_u32(&bytes, 0), Ok((value, bytes.len())));
        }
    }

    #[test]
    fn signed_round_trips() {
        for value in [0, 1, -1, 64, -64, 300, -300, i32::MIN, i32::MAX] {
            let bytes = encode_u32_vec(zigzag(value));
            assert_eq!(decode_i32(&bytes, 0), Ok((value, bytes.len())));
        }
    }

    #[test]
    fn decode_stops_at_first_terminal_byte() {
        // Trailing garbage after the terminal byte must not be consumed.
        assert_eq!(decode_u32(&[0x07, 0xff, 0xff], 0), Ok((7, 1)));
    }

    #[test]
    fn decode_rejects_exhausted_buffer() {
        assert_eq!(decode_u32(&[], 0), Err(WireError::UnexpectedEndOfBuffer));
        assert_eq!(
            decode_u32(&[0x80, 0x80], 0),
            Err(WireError::UnexpectedEndOfBuffer)
        );
    }

    #[test]
    fn decode_rejects_overlong_continuation() {
        // Five groups consumed and the fifth still signals continuation.
        let bytes = [0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        assert_eq!(
            decode_u32(&bytes, 0),
            Err(WireError::UnexpectedEndOfBuffer)
        );
    }

    #[test]
    fn decode_truncates_fifth_group_overflow() {
        // 0x7f in the fifth group carries bits above u32; only the low four
        // survive the shift.
        let bytes = [0xff, 0xff, 0xff, 0xff, 0x7f];
        assert_eq!(decode_u32(&bytes, 0), Ok((u32::MAX, 5)));
    }

    #[test]
    fn decode_honours_starting_offset() {
        let bytes = [0x00, 0x00, 0xac, 0x02];
        assert_eq!(decode_u32(&bytes, 2), Ok((300, 2)));
    }
}
