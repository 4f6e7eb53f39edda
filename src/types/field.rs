//! Field descriptions and record layout
//!
//! A PCD record is the concatenation of its fields, each `size * count`
//! bytes wide. [`FieldLayout`] keeps the declared fields in order together
//! with the byte offset of each one inside the record.

use crate::error::{PcdError, Result};
use std::fmt;
use std::ops::Range;

/// Storage type of a field (the PCD `TYPE` letter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `I`
    Signed,
    /// `U`
    Unsigned,
    /// `F`
    Float,
}

impl FieldType {
    /// Parse a `TYPE` letter
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'I' => Some(FieldType::Signed),
            'U' => Some(FieldType::Unsigned),
            'F' => Some(FieldType::Float),
            _ => None,
        }
    }

    /// The `TYPE` letter
    pub const fn code(&self) -> char {
        match self {
            FieldType::Signed => 'I',
            FieldType::Unsigned => 'U',
            FieldType::Float => 'F',
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    /// Byte size of one element
    pub size: u32,
    pub field_type: FieldType,
    /// Number of elements (array width)
    pub count: u32,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, size: u32, field_type: FieldType, count: u32) -> Self {
        Self {
            name: name.into(),
            size,
            field_type,
            count,
        }
    }

    /// Bytes occupied by this field in a record
    pub fn byte_len(&self) -> usize {
        self.size as usize * self.count as usize
    }
}

/// Location of a field within a record and within an ascii line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// Token position of the field's first element in an ascii line
    pub token_index: usize,
    /// Byte range of the whole field in a binary record
    pub bytes: Range<usize>,
}

/// Ordered fields plus derived offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    fields: Vec<FieldSpec>,
    offsets: Vec<usize>,
    token_indices: Vec<usize>,
    record_width: usize,
    token_count: usize,
}

impl FieldLayout {
    /// Build a layout, rejecting duplicate names and empty fields
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut offsets = Vec::with_capacity(fields.len());
        let mut token_indices = Vec::with_capacity(fields.len());
        let mut record_width = 0usize;
        let mut token_count = 0usize;

        for (i, field) in fields.iter().enumerate() {
            if field.count == 0 {
                return Err(PcdError::invalid_format(format!(
                    "field {:?} has a COUNT of 0",
                    field.name
                )));
            }
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(PcdError::invalid_format(format!(
                    "duplicate field {:?}",
                    field.name
                )));
            }
            offsets.push(record_width);
            token_indices.push(token_count);
            record_width += field.byte_len();
            token_count += field.count as usize;
        }

        Ok(Self {
            fields,
            offsets,
            token_indices,
            record_width,
            token_count,
        })
    }

    /// Zip the FIELDS/SIZE/TYPE/COUNT header values positionally
    pub fn from_columns(
        names: &[String],
        sizes: &[u32],
        types: &[FieldType],
        counts: &[u32],
    ) -> Result<Self> {
        if names.len() != sizes.len() || names.len() != types.len() || names.len() != counts.len() {
            return Err(PcdError::invalid_format(format!(
                "FIELDS/SIZE/TYPE/COUNT lengths differ: {}/{}/{}/{}",
                names.len(),
                sizes.len(),
                types.len(),
                counts.len()
            )));
        }

        let fields = names
            .iter()
            .zip(sizes)
            .zip(types)
            .zip(counts)
            .map(|(((name, &size), &field_type), &count)| {
                FieldSpec::new(name.clone(), size, field_type, count)
            })
            .collect();
        Self::new(fields)
    }

    /// Declared fields in order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Sum of `size * count` over all fields
    pub fn record_width(&self) -> usize {
        self.record_width
    }

    /// Sum of `count` over all fields; the token count of an ascii line
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Byte range and ascii token index of a field
    pub fn slot(&self, name: &str) -> Option<FieldSlot> {
        self.position(name).map(|i| {
            let start = self.offsets[i];
            FieldSlot {
                token_index: self.token_indices[i],
                bytes: start..start + self.fields[i].byte_len(),
            }
        })
    }

    /// Check that `name` exists and is a 4-byte float
    pub fn require_f32(&self, name: &str) -> Result<FieldSlot> {
        let field = self
            .field(name)
            .ok_or_else(|| PcdError::invalid_format(format!("missing field {:?}", name)))?;
        if field.size != 4 {
            return Err(PcdError::UnsupportedFieldSize {
                field: field.name.clone(),
                size: field.size,
            });
        }
        if field.field_type != FieldType::Float {
            return Err(PcdError::UnsupportedFieldType {
                field: field.name.clone(),
                field_type: field.field_type.code(),
            });
        }
        self.slot(name)
            .ok_or_else(|| PcdError::invalid_format(format!("missing field {:?}", name)))
    }

    /// Resolve the x, y and z slots every decoder needs
    pub fn xyz_slots(&self) -> Result<[FieldSlot; 3]> {
        Ok([
            self.require_f32("x")?,
            self.require_f32("y")?,
            self.require_f32("z")?,
        ])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
