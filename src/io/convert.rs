//! Conversion of point cloud files to canonical binary PCD

use crate::error::{PcdError, Result};
use crate::io::bin::BinReader;
use crate::io::pcd::{PcdReader, PcdWriter};
use crate::types::PointCloud;
use std::io::Write;
use std::path::Path;

/// Source formats recognised by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Raw ".bin" records
    Bin,
    /// Any PCD v0.7 file
    Pcd,
}

impl SourceFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "bin" => Ok(SourceFormat::Bin),
            "pcd" => Ok(SourceFormat::Pcd),
            _ => Err(PcdError::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// Decode a file in any supported format
pub fn read_point_cloud_file<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    let path = path.as_ref();
    match SourceFormat::from_path(path)? {
        SourceFormat::Bin => BinReader::from_file(path)?.read(),
        SourceFormat::Pcd => PcdReader::from_file(path)?.read(),
    }
}

/// Decode `source` and write it to `out` as canonical binary PCD
pub fn convert_file_to_pcd<P: AsRef<Path>, W: Write>(source: P, out: W) -> Result<()> {
    let cloud = read_point_cloud_file(&source)?;
    log::debug!(
        "converting {} ({} points) to PCD",
        source.as_ref().display(),
        cloud.len()
    );
    PcdWriter::new(&cloud).write_to_writer(out)
}
