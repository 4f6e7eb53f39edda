//! PCD file writer
//!
//! Output is always the canonical layout: fields `x y z intensity` as 4-byte
//! floats, `HEIGHT 1`, and a binary body.

use crate::error::Result;
use crate::types::{Point, PointCloud, PCD_VERSION};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// First line of every written file
pub const HEADER_COMMENT: &str = "# .PCD v0.7 - Point Cloud Data file format";

/// Viewpoint written to every file (identity pose)
pub const DEFAULT_VIEWPOINT: &str = "0 0 0 1 0 0 0";

/// Bytes per written point
pub const RECORD_SIZE: usize = 16;

/// PCD file writer
pub struct PcdWriter<'a> {
    cloud: &'a PointCloud,
}

impl<'a> PcdWriter<'a> {
    /// Create a new writer for `cloud`
    pub fn new(cloud: &'a PointCloud) -> Self {
        Self { cloud }
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        self.write_header(&mut writer)?;
        for point in self.cloud {
            write_record(&mut writer, point)?;
        }
        writer.flush()?;
        log::debug!("encoded {} points as binary PCD", self.cloud.len());
        Ok(())
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(256 + self.cloud.len() * RECORD_SIZE);
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    fn write_header<W: Write>(&self, writer: &mut W) -> Result<()> {
        let n = self.cloud.len();
        let mut header = String::with_capacity(256);
        header.push_str(HEADER_COMMENT);
        header.push('\n');
        header.push_str(&format!("VERSION {}\n", PCD_VERSION));
        header.push_str("FIELDS x y z intensity\n");
        header.push_str("SIZE 4 4 4 4\n");
        header.push_str("TYPE F F F F\n");
        header.push_str("COUNT 1 1 1 1\n");
        header.push_str(&format!("WIDTH {}\n", n));
        header.push_str("HEIGHT 1\n");
        header.push_str(&format!("VIEWPOINT {}\n", DEFAULT_VIEWPOINT));
        header.push_str(&format!("POINTS {}\n", n));
        header.push_str("DATA binary\n");
        writer.write_all(header.as_bytes())?;
        Ok(())
    }
}

fn write_record<W: Write>(writer: &mut W, point: &Point) -> Result<()> {
    writer.write_f32::<LittleEndian>(point.x)?;
    writer.write_f32::<LittleEndian>(point.y)?;
    writer.write_f32::<LittleEndian>(point.z)?;
    writer.write_f32::<LittleEndian>(point.intensity)?;
    Ok(())
}

/// Encode `cloud` as a binary PCD stream
pub fn write_pcd<W: Write>(cloud: &PointCloud, writer: W) -> Result<()> {
    PcdWriter::new(cloud).write_to_writer(writer)
}

/// Encode `cloud` to a binary PCD file
pub fn write_pcd_file<P: AsRef<Path>>(cloud: &PointCloud, path: P) -> Result<()> {
    PcdWriter::new(cloud).write_to_file(path)
}
