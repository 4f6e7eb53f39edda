//! Raw ".bin" point files
//!
//! A headerless sequence of 16-byte records, each four little-endian `f32`
//! values: x, y, z, intensity. Unlike PCD bodies the intensity is read from
//! the data.

use crate::error::Result;
use crate::io::stream_reader::{read_record, PointStreamReader};
use crate::types::{Point, PointCloud};
use byteorder::{ByteOrder, LittleEndian};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Bytes per record
pub const BIN_RECORD_SIZE: usize = 16;

/// Raw ".bin" reader
pub struct BinReader<R: Read> {
    reader: BufReader<R>,
    record: [u8; BIN_RECORD_SIZE],
}

impl<R: Read> BinReader<R> {
    /// Create a new reader from any reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            record: [0u8; BIN_RECORD_SIZE],
        }
    }

    /// Read all records
    pub fn read(mut self) -> Result<PointCloud> {
        let mut cloud = PointCloud::new();
        self.read_into(&mut cloud)?;
        log::debug!("decoded {} points from raw bin", cloud.len());
        Ok(cloud)
    }
}

impl BinReader<File> {
    /// Create a new reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> PointStreamReader for BinReader<R> {
    fn read_point(&mut self) -> Result<Option<Point>> {
        if !read_record(&mut self.reader, &mut self.record)? {
            return Ok(None);
        }
        let mut values = [0f32; 4];
        LittleEndian::read_f32_into(&self.record, &mut values);
        Ok(Some(Point::from(values)))
    }
}

/// Decode a raw ".bin" stream
pub fn read_bin<R: Read>(reader: R) -> Result<PointCloud> {
    BinReader::from_reader(reader).read()
}

/// Decode a raw ".bin" file
pub fn read_bin_file<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    BinReader::from_file(path)?.read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PcdError;
    use std::io::Cursor;

    fn record(values: [f32; 4]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_read_record_with_intensity() {
        let cloud = read_bin(Cursor::new(record([1.0, 2.0, 3.0, 9.0]))).unwrap();
        assert_eq!(cloud.points(), &[Point::new(1.0, 2.0, 3.0, 9.0)]);
    }

    #[test]
    fn test_read_many_records() {
        let mut data = Vec::new();
        for i in 0..100 {
            data.extend(record([i as f32, -(i as f32), 0.25, 0.0]));
        }
        let cloud = read_bin(Cursor::new(data)).unwrap();
        assert_eq!(cloud.len(), 100);
        assert_eq!(cloud.points()[99], Point::new(99.0, -99.0, 0.25, 0.0));
    }

    #[test]
    fn test_empty_stream() {
        assert!(read_bin(Cursor::new(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn test_partial_trailing_record() {
        let mut data = record([1.0, 2.0, 3.0, 9.0]);
        data.extend_from_slice(&[0u8; 15]);
        let err = read_bin(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, PcdError::InvalidFormat(_)));
    }
}
