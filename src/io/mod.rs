//! I/O module for reading and writing point cloud files in PCD and raw binary formats

pub mod bin;
pub mod compression;
pub mod convert;
pub mod pcd;
mod stream_reader;

pub use bin::{read_bin, read_bin_file, BinReader};
pub use convert::{convert_file_to_pcd, read_point_cloud_file, SourceFormat};
pub use pcd::{read_pcd, read_pcd_file, write_pcd, write_pcd_file, PcdReader, PcdWriter};
pub use stream_reader::PointStreamReader;
