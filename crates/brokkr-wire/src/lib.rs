// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide wire codec primitives for the Brokkr record protocol.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Brokkr wire codec primitives: big-endian integer fields, zig-zag and
//! base-128 varints, record identifiers, CRC32C range checksums, and the
//! writer/reader pair that assembles and consumes record buffers.
//!
//! The layer is synchronous and allocation-light: a [`WireWriter`] owns a
//! growable arena filled through reserve/commit appends, a [`WireReader`]
//! borrows a finished buffer and walks it with an explicit cursor. Framing,
//! dispatch, and transport policy live in the crates above this one.

mod ident;
mod reader;
mod types;
mod writer;

pub mod crc;
pub mod fuzz;
pub mod varint;

pub use ident::{decode_ident, encode_ident};
pub use reader::WireReader;
pub use types::*;
pub use writer::WireWriter;
