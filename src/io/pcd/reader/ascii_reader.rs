//! PCD ascii body reader

use crate::error::{PcdError, Result};
use crate::io::stream_reader::{read_line, PointStreamReader};
use crate::types::{FieldLayout, Point};
use std::io::BufRead;

/// Reads one point per text line
///
/// Every line must hold exactly one token per field element (the sum of
/// `COUNT`), separated by single spaces. Intensity is not read.
pub struct AsciiPointReader<R: BufRead> {
    reader: R,
    xyz: [usize; 3],
    token_count: usize,
    line: Vec<u8>,
    values: Vec<f64>,
    line_number: usize,
}

impl<R: BufRead> AsciiPointReader<R> {
    pub fn new(reader: R, layout: &FieldLayout) -> Result<Self> {
        let [x, y, z] = layout.xyz_slots()?;
        Ok(Self {
            reader,
            xyz: [x.token_index, y.token_index, z.token_index],
            token_count: layout.token_count(),
            line: Vec::new(),
            values: Vec::with_capacity(layout.token_count()),
            line_number: 0,
        })
    }

    fn parse_line(&mut self) -> Result<()> {
        let line = std::str::from_utf8(&self.line).map_err(|_| {
            PcdError::invalid_format(format!("point line {} is not UTF-8", self.line_number))
        })?;

        self.values.clear();
        for token in line.split(' ') {
            let value = token.parse::<f64>().map_err(|_| {
                PcdError::invalid_format(format!(
                    "invalid number {:?} on point line {}",
                    token, self.line_number
                ))
            })?;
            self.values.push(value);
        }

        if self.values.len() != self.token_count {
            return Err(PcdError::invalid_format(format!(
                "point line {} has {} values, expected {}",
                self.line_number,
                self.values.len(),
                self.token_count
            )));
        }
        Ok(())
    }
}

impl<R: BufRead> PointStreamReader for AsciiPointReader<R> {
    fn read_point(&mut self) -> Result<Option<Point>> {
        if !read_line(&mut self.reader, &mut self.line)? {
            return Ok(None);
        }
        self.line_number += 1;
        self.parse_line()?;

        let [x, y, z] = self.xyz;
        Ok(Some(Point::from_xyz(
            self.values[x] as f32,
            self.values[y] as f32,
            self.values[z] as f32,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldSpec, FieldType, PointCloud};
    use std::io::Cursor;

    fn xyz_layout() -> FieldLayout {
        FieldLayout::new(vec![
            FieldSpec::new("x", 4, FieldType::Float, 1),
            FieldSpec::new("y", 4, FieldType::Float, 1),
            FieldSpec::new("z", 4, FieldType::Float, 1),
        ])
        .unwrap()
    }

    fn read_all(body: &str, layout: &FieldLayout) -> Result<PointCloud> {
        let mut reader = AsciiPointReader::new(Cursor::new(body.as_bytes().to_vec()), layout)?;
        let mut cloud = PointCloud::new();
        reader.read_into(&mut cloud)?;
        Ok(cloud)
    }

    #[test]
    fn test_read_lines() {
        let cloud = read_all("1 2 3\n4.5 -5 6e1\n", &xyz_layout()).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.points()[1], Point::new(4.5, -5.0, 60.0, 1.0));
    }

    #[test]
    fn test_last_line_without_newline() {
        let cloud = read_all("1 2 3\r\n7 8 9", &xyz_layout()).unwrap();
        assert_eq!(cloud.points()[1].z, 9.0);
    }

    #[test]
    fn test_index_uses_counts_not_sizes() {
        // normal has 3 elements of 4 bytes and sits before x
        let layout = FieldLayout::new(vec![
            FieldSpec::new("normal", 4, FieldType::Float, 3),
            FieldSpec::new("x", 4, FieldType::Float, 1),
            FieldSpec::new("label", 2, FieldType::Unsigned, 1),
            FieldSpec::new("y", 4, FieldType::Float, 1),
            FieldSpec::new("z", 4, FieldType::Float, 1),
        ])
        .unwrap();
        let cloud = read_all("0 0 1 10 7 20 30\n", &layout).unwrap();
        assert_eq!(cloud.points()[0], Point::new(10.0, 20.0, 30.0, 1.0));
    }

    #[test]
    fn test_token_count_mismatch() {
        let err = read_all("1 2 3\n1 2\n", &xyz_layout()).unwrap_err();
        assert!(matches!(err, PcdError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_double_space_is_invalid() {
        let err = read_all("1  2 3\n", &xyz_layout()).unwrap_err();
        assert!(matches!(err, PcdError::InvalidFormat(_)));
    }

    #[test]
    fn test_intensity_field_ignored() {
        let layout = FieldLayout::new(vec![
            FieldSpec::new("x", 4, FieldType::Float, 1),
            FieldSpec::new("y", 4, FieldType::Float, 1),
            FieldSpec::new("z", 4, FieldType::Float, 1),
            FieldSpec::new("intensity", 4, FieldType::Float, 1),
        ])
        .unwrap();
        let cloud = read_all("1 2 3 42\n", &layout).unwrap();
        assert_eq!(cloud.points()[0].intensity, 1.0);
    }

    #[test]
    fn test_missing_z_field() {
        let layout = FieldLayout::new(vec![
            FieldSpec::new("x", 4, FieldType::Float, 1),
            FieldSpec::new("y", 4, FieldType::Float, 1),
        ])
        .unwrap();
        assert!(matches!(read_all("1 2\n", &layout), Err(PcdError::InvalidFormat(_))));
    }
}
