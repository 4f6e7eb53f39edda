//! Error types for pcd-tools

use std::io;
use thiserror::Error;

/// Main error type for point cloud decoding, encoding and analysis
#[derive(Debug, Error)]
pub enum PcdError {
    /// IO error occurred while reading or writing a stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The VERSION line is missing or declares something other than 0.7
    #[error("Unsupported PCD version: {0:?}")]
    UnsupportedVersion(String),

    /// Malformed header, truncated record or inconsistent sizes
    #[error("Invalid PCD format: {0}")]
    InvalidFormat(String),

    /// A coordinate field is not 4 bytes wide
    #[error("Unsupported size {size} for field {field:?}")]
    UnsupportedFieldSize { field: String, size: u32 },

    /// A coordinate field is not a float
    #[error("Unsupported type {field_type:?} for field {field:?}")]
    UnsupportedFieldType { field: String, field_type: char },

    /// DATA is not one of ascii, binary or binary_compressed
    #[error("Unsupported PCD data type: {0:?}")]
    UnsupportedDataType(String),

    /// The compressed body could not be decompressed
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// File extension has no decoder
    #[error("Unsupported point cloud file type: {0:?}")]
    UnsupportedFileType(String),

    /// An oriented-box label did not hold exactly seven values
    #[error("Invalid label: expected 7 values, got {0}")]
    InvalidLabel(usize),
}

/// Result type alias for pcd-tools operations
pub type Result<T> = std::result::Result<T, PcdError>;

impl PcdError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        PcdError::InvalidFormat(message.into())
    }
}
