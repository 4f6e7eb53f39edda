//! # pcdtools
//!
//! A pure Rust library for reading, writing and measuring point clouds.
//!
//! ## Features
//!
//! - Read PCD v0.7 files with `ascii`, `binary` and `binary_compressed` (LZF) bodies
//! - Read headerless raw ".bin" files of `x y z intensity` float records
//! - Write canonical binary PCD files
//! - Footprint area and oriented-box point counts over a decoded cloud
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pcdtools::{io::pcd::PcdReader, PcdWriter};
//!
//! // Read a PCD file
//! let cloud = PcdReader::from_file("scan.pcd")?.read()?;
//!
//! // Estimate its footprint with 0.5 m cells
//! println!("area: {}", cloud.xy_area(2.0));
//!
//! // Write it back as binary PCD
//! PcdWriter::new(&cloud).write_to_file("out.pcd")?;
//! # Ok::<(), pcdtools::PcdError>(())
//! ```
//!
//! ## Intensity
//!
//! PCD bodies are decoded for x, y and z only; every decoded point carries an
//! intensity of 1.0. Raw ".bin" files keep the intensity stored in the
//! fourth float of each record.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod error;
pub mod io;
pub mod types;

// Re-export commonly used types
pub use error::{PcdError, Result};
pub use types::{
    DataEncoding, FieldLayout, FieldSpec, FieldType, PcdHeader, Point, PointCloud,
};

// Re-export analysis
pub use analysis::{
    measure, oriented_box_point_count, xy_footprint_area, AnalysisConfiguration, Measurement,
    OrientedBox,
};

// Re-export I/O types
pub use io::{
    convert_file_to_pcd, read_bin, read_pcd, write_pcd, BinReader, PcdReader, PcdWriter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
