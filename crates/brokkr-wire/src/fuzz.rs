// Author: Lukas Bower
// Purpose: Provide a fuzz corpus harness for Brokkr wire buffer decoding.

//! Fuzz corpus harnesses for wire buffer decoding.

use crate::WireReader;

/// Exercise reader paths on arbitrary corpus bytes.
pub fn fuzz_decode(bytes: &[u8]) {
    let mut reader = WireReader::new(bytes);
    let _ = reader.read_uvarint();
    let _ = reader.read_varint();
    let _ = reader.read_i16();
    let _ = reader.read_i32();
    let _ = reader.read_i64();
    let _ = reader.read_ident();

    let mut reader = WireReader::new(bytes);
    let _ = reader.read_string(bytes.len());
}
