//! Point stream reader trait and shared stream helpers

use crate::error::{PcdError, Result};
use crate::types::{Point, PointCloud};
use std::io::{BufRead, ErrorKind, Read};

/// Trait for decoders that yield one point per record
pub trait PointStreamReader {
    /// Read the next point, `None` on clean end of stream
    fn read_point(&mut self) -> Result<Option<Point>>;

    /// Drain the stream into `cloud`
    fn read_into(&mut self, cloud: &mut PointCloud) -> Result<()> {
        while let Some(point) = self.read_point()? {
            cloud.push(point);
        }
        Ok(())
    }
}

/// Fill `buf` with one fixed-width record.
///
/// Returns `false` when the stream ended exactly on a record boundary.
/// A stream ending inside the record is an `InvalidFormat` error.
pub(crate) fn read_record<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    match filled {
        0 if !buf.is_empty() => Ok(false),
        n if n == buf.len() => Ok(true),
        n => Err(PcdError::invalid_format(format!(
            "truncated record: {} of {} bytes",
            n,
            buf.len()
        ))),
    }
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator.
///
/// Returns `false` at end of stream when nothing was read.
pub(crate) fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}
