//! PCD header reader

use crate::error::{PcdError, Result};
use crate::io::stream_reader::read_line;
use crate::types::{DataEncoding, FieldLayout, FieldType, PcdHeader, PCD_VERSION};
use nom::bytes::complete::take_till1;
use nom::character::complete::{space0, space1};
use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::IResult;
use std::io::BufRead;
use std::str::FromStr;

/// Lines starting with this are skipped before the VERSION line
pub const COMMENT_MARKER: char = '#';

/// Number of header lines following VERSION
pub const HEADER_LINE_COUNT: usize = 9;

/// Header keywords in canonical order
pub const HEADER_KEYWORDS: [&str; HEADER_LINE_COUNT] = [
    "FIELDS",
    "SIZE",
    "TYPE",
    "COUNT",
    "WIDTH",
    "HEIGHT",
    "VIEWPOINT",
    "POINTS",
    "DATA",
];

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ' || c == '\t')(input)
}

/// `KEYWORD arg arg ...`
fn header_line(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    let (input, _) = space0(input)?;
    let (input, keyword) = token(input)?;
    let (input, args) = terminated(many0(preceded(space1, token)), space0)(input)?;
    Ok((input, (keyword, args)))
}

fn split_line(line: &str) -> Option<(&str, Vec<&str>)> {
    all_consuming(header_line)(line).ok().map(|(_, parsed)| parsed)
}

/// The nine header lines, one slot per keyword
#[derive(Debug, Default)]
struct HeaderRecord {
    slots: [Option<Vec<String>>; HEADER_LINE_COUNT],
}

impl HeaderRecord {
    fn insert(&mut self, keyword: &str, args: Vec<&str>) -> Result<()> {
        let index = HEADER_KEYWORDS
            .iter()
            .position(|k| *k == keyword)
            .ok_or_else(|| PcdError::invalid_format(format!("unknown header keyword {:?}", keyword)))?;

        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(PcdError::invalid_format(format!(
                "duplicate header keyword {:?}",
                keyword
            )));
        }
        *slot = Some(args.into_iter().map(str::to_string).collect());
        Ok(())
    }

    fn take(&mut self, keyword: &str) -> Result<Vec<String>> {
        HEADER_KEYWORDS
            .iter()
            .position(|k| *k == keyword)
            .and_then(|i| self.slots[i].take())
            .ok_or_else(|| PcdError::invalid_format(format!("missing header keyword {:?}", keyword)))
    }
}

/// Reads the header of a PCD stream, leaving the reader at the first body byte
pub struct HeaderReader<'a, R: BufRead> {
    reader: &'a mut R,
    line: Vec<u8>,
    line_number: usize,
}

impl<'a, R: BufRead> HeaderReader<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Read the VERSION line and the nine header lines after it
    pub fn read(mut self) -> Result<PcdHeader> {
        let version = self.read_version()?;

        let mut record = HeaderRecord::default();
        for _ in 0..HEADER_LINE_COUNT {
            let line = self.next_line()?;
            let (keyword, args) = split_line(&line).ok_or_else(|| {
                PcdError::invalid_format(format!(
                    "malformed header line {}: {:?}",
                    self.line_number, line
                ))
            })?;
            record.insert(keyword, args)?;
        }

        let header = build_header(version, &mut record)?;

        log::debug!(
            "parsed PCD header: {} fields, {}x{}, {}",
            header.layout.fields().len(),
            header.width,
            header.height,
            header.data
        );
        if let Some(points) = header.declared_points() {
            if points != header.point_count() {
                log::warn!(
                    "POINTS {} disagrees with WIDTH*HEIGHT {}",
                    points,
                    header.point_count()
                );
            }
        }

        Ok(header)
    }

    fn read_version(&mut self) -> Result<String> {
        let line = loop {
            let line = self.next_line()?;
            if !line.starts_with(COMMENT_MARKER) {
                break line;
            }
        };

        match split_line(&line) {
            Some(("VERSION", args)) if args == [PCD_VERSION] => Ok(PCD_VERSION.to_string()),
            Some(("VERSION", args)) => Err(PcdError::UnsupportedVersion(args.join(" "))),
            _ => Err(PcdError::UnsupportedVersion(line.clone())),
        }
    }

    fn next_line(&mut self) -> Result<String> {
        if !read_line(&mut *self.reader, &mut self.line)? {
            return Err(PcdError::invalid_format(format!(
                "unexpected end of stream in header after line {}",
                self.line_number
            )));
        }
        self.line_number += 1;
        String::from_utf8(self.line.clone()).map_err(|_| {
            PcdError::invalid_format(format!("header line {} is not UTF-8", self.line_number))
        })
    }
}

fn build_header(version: String, record: &mut HeaderRecord) -> Result<PcdHeader> {
    let names = record.take("FIELDS")?;
    let sizes = parse_all::<u32>("SIZE", &record.take("SIZE")?)?;
    let types = record
        .take("TYPE")?
        .iter()
        .map(|t| parse_type(t))
        .collect::<Result<Vec<_>>>()?;
    let counts = parse_all::<u32>("COUNT", &record.take("COUNT")?)?;
    let layout = FieldLayout::from_columns(&names, &sizes, &types, &counts)?;

    let width = parse_single::<u32>("WIDTH", &record.take("WIDTH")?)?;
    let height = parse_single::<u32>("HEIGHT", &record.take("HEIGHT")?)?;
    let viewpoint = record.take("VIEWPOINT")?;
    let points = record.take("POINTS")?;

    let data = match record.take("DATA")?.as_slice() {
        [data] => data.parse::<DataEncoding>()?,
        other => {
            return Err(PcdError::invalid_format(format!(
                "DATA expects one value, got {}",
                other.len()
            )))
        }
    };

    Ok(PcdHeader {
        version,
        layout,
        width,
        height,
        viewpoint,
        points,
        data,
    })
}

fn parse_type(token: &str) -> Result<FieldType> {
    let mut chars = token.chars();
    let field_type = match (chars.next(), chars.next()) {
        (Some(c), None) => FieldType::from_code(c),
        _ => None,
    };
    field_type.ok_or_else(|| PcdError::invalid_format(format!("invalid TYPE {:?}", token)))
}

fn parse_all<T: FromStr>(keyword: &str, values: &[String]) -> Result<Vec<T>> {
    values
        .iter()
        .map(|v| {
            v.parse::<T>()
                .map_err(|_| PcdError::invalid_format(format!("invalid {} value {:?}", keyword, v)))
        })
        .collect()
}

fn parse_single<T: FromStr>(keyword: &str, values: &[String]) -> Result<T> {
    match values {
        [value] => value
            .parse::<T>()
            .map_err(|_| PcdError::invalid_format(format!("invalid {} value {:?}", keyword, value))),
        _ => Err(PcdError::invalid_format(format!(
            "{} expects one value, got {}",
            keyword,
            values.len()
        ))),
    }
}
