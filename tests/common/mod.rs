//! Shared test utilities for pcdtools integration tests.
//!
//! Builders for PCD headers and bodies in each encoding, so tests can state
//! the same points once and decode them through every path.

#![allow(dead_code)]

/// A PCD header for the given fields, each a 4-byte float of count 1
pub fn header(fields: &[&str], width: usize, height: usize, data: &str) -> String {
    let n = fields.len();
    format!(
        "# generated by tests\n\
         VERSION 0.7\n\
         FIELDS {}\n\
         SIZE {}\n\
         TYPE {}\n\
         COUNT {}\n\
         WIDTH {}\n\
         HEIGHT {}\n\
         VIEWPOINT 0 0 0 1 0 0 0\n\
         POINTS {}\n\
         DATA {}\n",
        fields.join(" "),
        vec!["4"; n].join(" "),
        vec!["F"; n].join(" "),
        vec!["1"; n].join(" "),
        width,
        height,
        width * height,
        data
    )
}

/// One ascii line per row
pub fn ascii_body(rows: &[Vec<f32>]) -> Vec<u8> {
    rows.iter()
        .map(|row| {
            let tokens: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            format!("{}\n", tokens.join(" "))
        })
        .collect::<String>()
        .into_bytes()
}

/// Little-endian float records, one per row
pub fn binary_body(rows: &[Vec<f32>]) -> Vec<u8> {
    rows.iter()
        .flat_map(|row| row.iter().flat_map(|v| v.to_le_bytes()))
        .collect()
}

/// LZF stream made of literal runs only
pub fn lzf_literals(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 32 + 1);
    for chunk in data.chunks(32) {
        out.push((chunk.len() - 1) as u8);
        out.extend_from_slice(chunk);
    }
    out
}

/// A binary_compressed body: size prefix plus LZF payload
pub fn compressed_body(rows: &[Vec<f32>]) -> Vec<u8> {
    let raw = binary_body(rows);
    compressed_block(&lzf_literals(&raw), raw.len() as u32)
}

/// Size prefix followed by `payload`
pub fn compressed_block(payload: &[u8], uncompressed_len: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&uncompressed_len.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// Header followed by body
pub fn pcd_file(header: &str, body: &[u8]) -> Vec<u8> {
    let mut out = header.as_bytes().to_vec();
    out.extend_from_slice(body);
    out
}

/// A raw ".bin" file from `[x, y, z, intensity]` records
pub fn bin_file(records: &[[f32; 4]]) -> Vec<u8> {
    records
        .iter()
        .flat_map(|r| r.iter().flat_map(|v| v.to_le_bytes()))
        .collect()
}
