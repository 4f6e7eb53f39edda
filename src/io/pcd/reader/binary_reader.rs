//! PCD binary body reader

use crate::error::Result;
use crate::io::stream_reader::{read_record, PointStreamReader};
use crate::types::{FieldLayout, Point};
use byteorder::{ByteOrder, LittleEndian};
use std::io::Read;

/// Reads fixed-width little-endian records
///
/// x, y and z are taken from the first four bytes of their field. Intensity
/// is not read.
pub struct BinaryPointReader<R: Read> {
    reader: R,
    record: Vec<u8>,
    xyz: [usize; 3],
}

impl<R: Read> BinaryPointReader<R> {
    pub fn new(reader: R, layout: &FieldLayout) -> Result<Self> {
        let [x, y, z] = layout.xyz_slots()?;
        Ok(Self {
            reader,
            record: vec![0u8; layout.record_width()],
            xyz: [x.bytes.start, y.bytes.start, z.bytes.start],
        })
    }

    fn f32_at(&self, offset: usize) -> f32 {
        LittleEndian::read_f32(&self.record[offset..offset + 4])
    }
}

impl<R: Read> PointStreamReader for BinaryPointReader<R> {
    fn read_point(&mut self) -> Result<Option<Point>> {
        if !read_record(&mut self.reader, &mut self.record)? {
            return Ok(None);
        }
        let [x, y, z] = self.xyz;
        Ok(Some(Point::from_xyz(
            self.f32_at(x),
            self.f32_at(y),
            self.f32_at(z),
        )))
    }
}
