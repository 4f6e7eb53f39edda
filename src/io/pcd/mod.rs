//! PCD (Point Cloud Data) v0.7 reading and writing
//!
//! Reading accepts `ascii`, `binary` and `binary_compressed` bodies and
//! keeps only x, y and z (intensity is set to 1.0). Writing always produces
//! the binary form with `x y z intensity` fields.

mod reader;
mod writer;

pub use reader::{
    read_compressed_body, read_pcd, read_pcd_file, AsciiPointReader, BinaryPointReader,
    CompressedBlock, HeaderReader, PcdReader, PcdReaderConfiguration, BLOCK_PREFIX_SIZE,
    COMMENT_MARKER, HEADER_KEYWORDS, HEADER_LINE_COUNT,
};
pub use writer::{
    write_pcd, write_pcd_file, PcdWriter, DEFAULT_VIEWPOINT, HEADER_COMMENT, RECORD_SIZE,
};
