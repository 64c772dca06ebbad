// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Move exact byte counts between wire buffers and blocking streams.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Byte-transfer helpers bridging Brokkr wire buffers to blocking streams.
//!
//! Framing, connection lifecycle, retry, and timeout policy all stay with
//! the caller; these helpers only move an exact number of bytes and report
//! `std::io` failures as-is.

use std::io::{self, Read, Write};

use log::trace;

/// Read exactly `count` bytes from `reader`.
///
/// A stream that ends before `count` bytes arrive fails with
/// [`io::ErrorKind::UnexpectedEof`]; a short buffer is never returned, so a
/// closed peer cannot masquerade as an empty message.
pub fn read_exactly<R: Read>(reader: &mut R, count: usize) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; count];
    reader.read_exact(&mut buffer)?;
    trace!("read {count} bytes from stream");
    Ok(buffer)
}

/// Write all of `bytes` to `writer` and flush.
///
/// A sink that stops accepting bytes surfaces as
/// [`io::ErrorKind::WriteZero`].
pub fn send_all<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()?;
    trace!("sent {} bytes to stream", bytes.len());
    Ok(())
}
