//! LZF decompression.
//!
//! LZF streams are a sequence of chunks, each starting with a control byte:
//! - `000LLLLL`: a literal run of `L + 1` bytes follows
//! - `LLLooooo oooooooo`: a back-reference of `L + 2` bytes (`L == 7` reads an
//!   extra length byte) copied from `offset + 1` bytes behind the output end

use crate::error::{PcdError, Result};

const MAX_LITERAL: u8 = 1 << 5;

/// Decompressor for LZF streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzfDecompressor;

impl super::Decompressor for LzfDecompressor {
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>> {
        decompress(source, decompressed_size)
    }
}

/// Decompress `source`, failing if the output would exceed `max_len` bytes.
pub fn decompress(source: &[u8], max_len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(super::preallocation(max_len));
    let mut ip = 0usize;

    while ip < source.len() {
        let ctrl = source[ip];
        ip += 1;

        if ctrl < MAX_LITERAL {
            let len = ctrl as usize + 1;
            if out.len() + len > max_len {
                return Err(overrun(max_len));
            }
            let literal = source
                .get(ip..ip + len)
                .ok_or_else(|| truncated(ip))?;
            out.extend_from_slice(literal);
            ip += len;
        } else {
            let mut len = (ctrl >> 5) as usize;
            let mut back = ((ctrl & 0x1f) as usize) << 8;

            if len == 7 {
                len += *source.get(ip).ok_or_else(|| truncated(ip))? as usize;
                ip += 1;
            }
            back += *source.get(ip).ok_or_else(|| truncated(ip))? as usize;
            ip += 1;

            let len = len + 2;
            if out.len() + len > max_len {
                return Err(overrun(max_len));
            }
            let start = out
                .len()
                .checked_sub(back + 1)
                .ok_or_else(|| {
                    PcdError::Decompression(format!(
                        "back-reference {} bytes before start of output",
                        back + 1 - out.len()
                    ))
                })?;

            // Source and destination may overlap; copy byte by byte.
            for i in start..start + len {
                let byte = out[i];
                out.push(byte);
            }
        }
    }

    Ok(out)
}

fn overrun(max_len: usize) -> PcdError {
    PcdError::Decompression(format!("output exceeds {} bytes", max_len))
}

fn truncated(at: usize) -> PcdError {
    PcdError::Decompression(format!("input ends inside chunk at byte {}", at))
}
