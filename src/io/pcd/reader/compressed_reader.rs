//! PCD binary_compressed body reader
//!
//! The body is a single block: two little-endian `u32` sizes (compressed,
//! uncompressed) followed by the compressed bytes. The uncompressed bytes
//! are decoded as a binary body.

use super::binary_reader::BinaryPointReader;
use crate::error::{PcdError, Result};
use crate::io::compression::{preallocation, Decompressor};
use crate::io::stream_reader::read_record;
use crate::types::PcdHeader;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{Cursor, Read};

/// Size of the block size prefix
pub const BLOCK_PREFIX_SIZE: usize = 8;

/// Sizes declared at the start of a compressed body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedBlock {
    pub compressed_len: u32,
    pub uncompressed_len: u32,
}

impl CompressedBlock {
    /// Read the 8-byte size prefix
    pub fn read_prefix<R: Read>(reader: &mut R) -> Result<Self> {
        let mut prefix = [0u8; BLOCK_PREFIX_SIZE];
        if !read_record(reader, &mut prefix)? {
            return Err(PcdError::invalid_format("missing compressed block header"));
        }
        Ok(Self {
            compressed_len: LittleEndian::read_u32(&prefix[..4]),
            uncompressed_len: LittleEndian::read_u32(&prefix[4..]),
        })
    }
}

/// Read and decompress the block, returning the raw binary body
pub fn read_compressed_body<R: Read>(
    mut reader: R,
    header: &PcdHeader,
    decompressor: &dyn Decompressor,
) -> Result<Vec<u8>> {
    let block = CompressedBlock::read_prefix(&mut reader)?;
    log::trace!(
        "compressed block: {} -> {} bytes",
        block.compressed_len,
        block.uncompressed_len
    );

    let expected = header.body_size().ok_or_else(|| {
        PcdError::invalid_format(format!(
            "body of {}x{} points of {} bytes overflows",
            header.width,
            header.height,
            header.layout.record_width()
        ))
    })?;
    if u64::from(block.uncompressed_len) != expected {
        return Err(PcdError::invalid_format(format!(
            "uncompressed size {} does not match {} points of {} bytes",
            block.uncompressed_len,
            header.point_count(),
            header.layout.record_width()
        )));
    }

    let mut compressed = Vec::with_capacity(preallocation(block.compressed_len as usize));
    reader
        .by_ref()
        .take(u64::from(block.compressed_len))
        .read_to_end(&mut compressed)?;
    if compressed.len() != block.compressed_len as usize {
        return Err(PcdError::invalid_format(format!(
            "compressed block truncated: {} of {} bytes",
            compressed.len(),
            block.compressed_len
        )));
    }

    let body = decompressor.decompress(&compressed, block.uncompressed_len as usize)?;
    if body.len() != block.uncompressed_len as usize {
        return Err(PcdError::invalid_format(format!(
            "decompressed {} bytes, expected {}",
            body.len(),
            block.uncompressed_len
        )));
    }
    Ok(body)
}

/// Open a point reader over a compressed body
pub fn open<R: Read>(
    reader: R,
    header: &PcdHeader,
    decompressor: &dyn Decompressor,
) -> Result<BinaryPointReader<Cursor<Vec<u8>>>> {
    // Reject unusable coordinate fields before touching the block.
    header.layout.xyz_slots()?;
    let body = read_compressed_body(reader, header, decompressor)?;
    BinaryPointReader::new(Cursor::new(body), &header.layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::compression::LzfDecompressor;
    use crate::io::stream_reader::PointStreamReader;
    use crate::types::{DataEncoding, FieldLayout, FieldSpec, FieldType, Point, PointCloud};
    use std::cell::Cell;

    struct CountingDecompressor {
        calls: Cell<usize>,
    }

    impl Decompressor for CountingDecompressor {
        fn decompress(&self, source: &[u8], _decompressed_size: usize) -> Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(source.to_vec())
        }
    }

    fn header(width: u32) -> PcdHeader {
        PcdHeader {
            version: "0.7".to_string(),
            layout: FieldLayout::new(vec![
                FieldSpec::new("x", 4, FieldType::Float, 1),
                FieldSpec::new("y", 4, FieldType::Float, 1),
                FieldSpec::new("z", 4, FieldType::Float, 1),
            ])
            .unwrap(),
            width,
            height: 1,
            viewpoint: Vec::new(),
            points: vec![width.to_string()],
            data: DataEncoding::BinaryCompressed,
        }
    }

    fn block(compressed: &[u8], uncompressed_len: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(compressed.len() as u32).to_le_bytes());
        out.extend_from_slice(&uncompressed_len.to_le_bytes());
        out.extend_from_slice(compressed);
        out
    }

    fn raw_points(points: &[[f32; 3]]) -> Vec<u8> {
        points
            .iter()
            .flat_map(|p| p.iter().flat_map(|v| v.to_le_bytes()))
            .collect()
    }

    #[test]
    fn test_decode_through_decompressor() {
        let raw = raw_points(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let counting = CountingDecompressor { calls: Cell::new(0) };
        let mut reader = open(Cursor::new(block(&raw, 24)), &header(2), &counting).unwrap();

        let mut cloud = PointCloud::new();
        reader.read_into(&mut cloud).unwrap();
        assert_eq!(counting.calls.get(), 1);
        assert_eq!(cloud.points()[1], Point::new(4.0, 5.0, 6.0, 1.0));
    }

    #[test]
    fn test_size_mismatch_checked_before_decompression() {
        let raw = raw_points(&[[1.0, 2.0, 3.0]]);
        let counting = CountingDecompressor { calls: Cell::new(0) };
        let result = read_compressed_body(Cursor::new(block(&raw, 12)), &header(2), &counting);
        assert!(matches!(result, Err(PcdError::InvalidFormat(_))));
        assert_eq!(counting.calls.get(), 0);
    }

    #[test]
    fn test_overflowing_body_size() {
        let mut huge = header(u32::MAX);
        huge.height = u32::MAX;
        let counting = CountingDecompressor { calls: Cell::new(0) };
        let result = read_compressed_body(Cursor::new(vec![0u8; 8]), &huge, &counting);
        assert!(matches!(result, Err(PcdError::InvalidFormat(msg)) if msg.contains("overflows")));
        assert_eq!(counting.calls.get(), 0);
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = block(&[0u8; 12], 12);
        data.truncate(data.len() - 1);
        let result = read_compressed_body(Cursor::new(data), &header(1), &LzfDecompressor);
        assert!(matches!(result, Err(PcdError::InvalidFormat(_))));
    }

    #[test]
    fn test_short_prefix() {
        let result = read_compressed_body(Cursor::new(vec![1u8, 2, 3]), &header(1), &LzfDecompressor);
        assert!(matches!(result, Err(PcdError::InvalidFormat(_))));
        let result = read_compressed_body(Cursor::new(Vec::new()), &header(1), &LzfDecompressor);
        assert!(matches!(result, Err(PcdError::InvalidFormat(_))));
    }

    #[test]
    fn test_decompressed_length_mismatch() {
        // a single 4-byte literal run where 12 bytes are expected
        let result = read_compressed_body(
            Cursor::new(block(&[3, 0, 0, 0, 0], 12)),
            &header(1),
            &LzfDecompressor,
        );
        assert!(matches!(result, Err(PcdError::InvalidFormat(_))));
    }

    #[test]
    fn test_decompressor_error_surfaces() {
        let result = read_compressed_body(
            Cursor::new(block(&[31, 0], 12)),
            &header(1),
            &LzfDecompressor,
        );
        assert!(matches!(result, Err(PcdError::Decompression(_))));
    }
}
