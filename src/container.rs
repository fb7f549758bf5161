//! SILK v3 stream framing.
//!
//! A stream starts with `#!SILK_V3`, optionally preceded by a `0x02` byte, and
//! is followed by packets, each prefixed with its length as a little-endian
//! `u16`.

use tracing::warn;

use crate::error::{Error, Result};

pub const SILK_V3_TAG: &[u8] = b"#!SILK_V3";

const TENCENT_PREFIX: u8 = 0x02;

/// Strip the SILK v3 header, returning the packet body.
pub fn strip_header(input: &[u8]) -> Result<&[u8]> {
    if let Some(rest) = input.strip_prefix(&[TENCENT_PREFIX]) {
        if let Some(body) = rest.strip_prefix(SILK_V3_TAG) {
            return Ok(body);
        }
    }
    input.strip_prefix(SILK_V3_TAG).ok_or(Error::InvalidHeader)
}

/// Iterator over the length-prefixed packets of a stream body.
///
/// Iteration ends when fewer than two bytes remain, or when a packet claims
/// more bytes than are left.
pub struct Packets<'a> {
    buf: &'a [u8],
}

impl<'a> Packets<'a> {
    pub fn new(body: &'a [u8]) -> Self {
        Self { buf: body }
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a> Iterator for Packets<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.len() < 2 {
            return None;
        }
        let plen = u16::from_le_bytes([self.buf[0], self.buf[1]]) as usize;

        let rest = &self.buf[2..];
        if rest.len() < plen {
            warn!(
                "{} bytes expected but only {} available",
                plen,
                rest.len()
            );
            self.buf = &[];
            return None;
        }

        let (payload, rest) = rest.split_at(plen);
        self.buf = rest;
        Some(payload)
    }
}
