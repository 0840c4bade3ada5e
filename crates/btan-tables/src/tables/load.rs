//! End-to-end loading: base64 text -> zlib stream -> raw tables.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;

use super::base64::decode_base64;
use super::decode::decode_tables;
use super::error::TableError;
use super::extract::{MARKER, extract_table_literal};
use super::raw::RawTableData;

/// Inflate a zlib-wrapped DEFLATE stream.
///
/// Anything after the end of the zlib stream (such as the zero padding the
/// base64 decoder may leave) is ignored.
pub fn inflate(compressed: &[u8]) -> Result<Vec<u8>, TableError> {
    let mut out = Vec::new();
    ZlibDecoder::new(compressed)
        .read_to_end(&mut out)
        .map_err(TableError::Decompress)?;
    tracing::debug!(
        compressed = compressed.len(),
        inflated = out.len(),
        "inflated tables"
    );
    Ok(out)
}

/// Decode tables from their embedded base64 text.
pub fn load_base64(text: &str) -> Result<RawTableData, TableError> {
    let compressed = decode_base64(text)?;
    let bytes = inflate(&compressed)?;
    decode_tables(&bytes)
}

/// Decode tables from generated parser source text.
pub fn load_source(source: &str) -> Result<RawTableData, TableError> {
    let literal = extract_table_literal(source)?;
    load_base64(&literal)
}

/// Decode tables from either parser source or bare encoded text.
///
/// Text containing the table constructor is parser source; anything else is
/// taken as the encoded tables, surrounding whitespace ignored.
pub fn load_text(text: &str) -> Result<RawTableData, TableError> {
    if text.contains(MARKER) {
        load_source(text)
    } else {
        load_base64(text.trim())
    }
}

/// Read `path` and decode it with [`load_text`].
pub fn load_file(path: &Path) -> Result<RawTableData, TableError> {
    let text = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), len = text.len(), "read table file");
    load_text(&text)
}
