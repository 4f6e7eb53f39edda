//! PCD header types

use super::FieldLayout;
use crate::error::PcdError;
use std::fmt;
use std::str::FromStr;

/// The only PCD version this crate reads
pub const PCD_VERSION: &str = "0.7";

/// Encoding of the body that follows the header (the `DATA` line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataEncoding {
    Ascii,
    Binary,
    BinaryCompressed,
}

impl DataEncoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataEncoding::Ascii => "ascii",
            DataEncoding::Binary => "binary",
            DataEncoding::BinaryCompressed => "binary_compressed",
        }
    }
}

impl FromStr for DataEncoding {
    type Err = PcdError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(DataEncoding::Ascii),
            "binary" => Ok(DataEncoding::Binary),
            "binary_compressed" => Ok(DataEncoding::BinaryCompressed),
            _ => Err(PcdError::UnsupportedDataType(s.to_string())),
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed PCD header
///
/// `viewpoint` and `points` are kept as the raw tokens of their lines;
/// nothing downstream depends on them.
#[derive(Debug, Clone, PartialEq)]
pub struct PcdHeader {
    pub version: String,
    pub layout: FieldLayout,
    pub width: u32,
    pub height: u32,
    pub viewpoint: Vec<String>,
    pub points: Vec<String>,
    pub data: DataEncoding,
}

impl PcdHeader {
    /// `WIDTH * HEIGHT`
    pub fn point_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Bytes of an uncompressed body holding `WIDTH * HEIGHT` records,
    /// `None` when that does not fit in a `u64`
    pub fn body_size(&self) -> Option<u64> {
        self.point_count()
            .checked_mul(self.layout.record_width() as u64)
    }

    /// The POINTS value, when it is a single integer
    pub fn declared_points(&self) -> Option<u64> {
        match self.points.as_slice() {
            [n] => n.parse().ok(),
            _ => None,
        }
    }
}
