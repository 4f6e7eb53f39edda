//! PCD file reader

mod ascii_reader;
mod binary_reader;
mod compressed_reader;
mod header_reader;

pub use ascii_reader::AsciiPointReader;
pub use binary_reader::BinaryPointReader;
pub use compressed_reader::{read_compressed_body, CompressedBlock, BLOCK_PREFIX_SIZE};
pub use header_reader::{HeaderReader, COMMENT_MARKER, HEADER_KEYWORDS, HEADER_LINE_COUNT};

use crate::error::{PcdError, Result};
use crate::io::compression::{Decompressor, LzfDecompressor};
use crate::io::stream_reader::PointStreamReader;
use crate::types::{DataEncoding, PcdHeader, PointCloud};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for the PCD reader.
#[derive(Debug, Clone, Default)]
pub struct PcdReaderConfiguration {
    /// When `true`, a body holding a different number of points than
    /// `WIDTH * HEIGHT` is rejected as `InvalidFormat`.
    ///
    /// Default: `false` (the body decides the point count).
    pub verify_point_count: bool,
}

/// PCD file reader
pub struct PcdReader<R: Read> {
    reader: BufReader<R>,
    config: PcdReaderConfiguration,
    decompressor: Box<dyn Decompressor>,
}

impl<R: Read> PcdReader<R> {
    /// Create a new PCD reader from any reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            config: PcdReaderConfiguration::default(),
            decompressor: Box::new(LzfDecompressor),
        }
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: PcdReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Replace the decompressor used for `binary_compressed` bodies.
    pub fn with_decompressor(mut self, decompressor: Box<dyn Decompressor>) -> Self {
        self.decompressor = decompressor;
        self
    }

    /// Read only the header, leaving the body unread
    pub fn read_header(&mut self) -> Result<PcdHeader> {
        HeaderReader::new(&mut self.reader).read()
    }

    /// Read the header and body and return the decoded points
    pub fn read(mut self) -> Result<PointCloud> {
        let header = self.read_header()?;
        let mut cloud = PointCloud::with_capacity(capacity_hint(&header));

        match header.data {
            DataEncoding::Ascii => {
                AsciiPointReader::new(&mut self.reader, &header.layout)?.read_into(&mut cloud)?
            }
            DataEncoding::Binary => {
                BinaryPointReader::new(&mut self.reader, &header.layout)?.read_into(&mut cloud)?
            }
            DataEncoding::BinaryCompressed => {
                compressed_reader::open(&mut self.reader, &header, self.decompressor.as_ref())?
                    .read_into(&mut cloud)?
            }
        }

        if self.config.verify_point_count && cloud.len() as u64 != header.point_count() {
            return Err(PcdError::invalid_format(format!(
                "decoded {} points, header declares {}x{}",
                cloud.len(),
                header.width,
                header.height
            )));
        }

        log::debug!("decoded {} points from {} PCD body", cloud.len(), header.data);
        Ok(cloud)
    }
}

impl PcdReader<File> {
    /// Create a new PCD reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

/// Pre-allocation bound so a lying header cannot force a huge allocation
fn capacity_hint(header: &PcdHeader) -> usize {
    const MAX_HINT: u64 = 1 << 20;
    header.point_count().min(MAX_HINT) as usize
}

/// Decode a PCD stream with the default configuration
pub fn read_pcd<R: Read>(reader: R) -> Result<PointCloud> {
    PcdReader::from_reader(reader).read()
}

/// Decode a PCD file with the default configuration
pub fn read_pcd_file<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
    PcdReader::from_file(path)?.read()
}
