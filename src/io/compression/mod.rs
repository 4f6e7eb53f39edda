//! Decompression for `binary_compressed` PCD bodies.
//!
//! The codec only needs bytes in, bytes out with a known target length, so
//! the dependency sits behind the [`Decompressor`] trait. [`LzfDecompressor`]
//! is the binding used by default; any other can be handed to
//! [`PcdReader::with_decompressor`](crate::io::pcd::PcdReader::with_decompressor).

pub mod lzf;

pub use lzf::LzfDecompressor;

use crate::error::Result;

/// Upper bound on buffer sizes taken from a block prefix before any data arrives
const MAX_PREALLOCATION: usize = 1 << 20;

/// Trait for decompressing data.
pub trait Decompressor: Send {
    /// Decompress a source buffer, returning at most `decompressed_size` bytes.
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>>;
}

/// Initial capacity for a buffer whose final length is declared by the stream
pub(crate) fn preallocation(declared_len: usize) -> usize {
    declared_len.min(MAX_PREALLOCATION)
}
