// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Convert record identifiers between host field grouping and wire byte order.
// Author: Lukas Bower

//! Record identifier codec.
//!
//! A record identifier is a 128-bit value with two serializations: the host
//! grouping splits it into a 4-byte field A, 2-byte fields B and C, and an
//! 8-byte field D, with A, B, and C stored reversed relative to network
//! order; the wire form is the canonical fully-big-endian 16 bytes. The
//! shuffle below is written as an explicit index mapping so the 4/2/2/8
//! field structure stays auditable.

use uuid::Uuid;

use crate::types::IDENT_WIRE_LEN;

/// Encode `id` into its canonical 16-byte wire form.
#[must_use]
pub fn encode_ident(id: Uuid) -> [u8; IDENT_WIRE_LEN] {
    let grouped = id.to_bytes_le();
    let mut wire = [0u8; IDENT_WIRE_LEN];
    // Field A: 4 bytes, reversed.
    wire[0] = grouped[3];
    wire[1] = grouped[2];
    wire[2] = grouped[1];
    wire[3] = grouped[0];
    // Field B: 2 bytes, reversed.
    wire[4] = grouped[5];
    wire[5] = grouped[4];
    // Field C: 2 bytes, reversed.
    wire[6] = grouped[7];
    wire[7] = grouped[6];
    // Field D: already network order.
    wire[8..].copy_from_slice(&grouped[8..]);
    wire
}

/// Decode a canonical 16-byte wire form back into the host identifier.
#[must_use]
pub fn decode_ident(wire: [u8; IDENT_WIRE_LEN]) -> Uuid {
    let mut grouped = [0u8; IDENT_WIRE_LEN];
    grouped[0] = wire[3];
    grouped[1] = wire[2];
    grouped[2] = wire[1];
    grouped[3] = wire[0];
    grouped[4] = wire[5];
    grouped[5] = wire[4];
    grouped[6] = wire[7];
    grouped[7] = wire[6];
    grouped[8..].copy_from_slice(&wire[8..]);
    Uuid::from_bytes_le(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_canonical_byte_order() {
        let id = Uuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap();
        let wire = encode_ident(id);
        assert_eq!(
            wire,
            [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ]
        );
    }

    #[test]
    fn decode_is_inverse_of_encode() {
        for id in [
            Uuid::nil(),
            Uuid::max(),
            Uuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap(),
            Uuid::parse_str("f81d4fae-7dec-11d0-a765-00a0c91e6bf6").unwrap(),
        ] {
            assert_eq!(decode_ident(encode_ident(id)), id);
        }
    }
}
