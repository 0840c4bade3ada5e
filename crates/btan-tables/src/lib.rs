//! Beaver parsing-table decoding and inspection.
//!
//! This crate contains:
//! - The serialized table format (custom base64, zlib, big-endian schema)
//! - The sparse action/goto table model and its lookups
//! - Offset-collision diagnostics and the human-readable dump

pub mod tables;

// Re-export commonly used items at crate root
pub use tables::{
    Action, ByteReader, CellKind, DumpOptions, Entry, Field, MARKER, OffsetCollision,
    RawTableData, RuleInfo, SparseTable, SymbolSpace, TableDiagnostics, TableError, TableSummary,
    decode_base64, decode_tables, decoded_len, dump, extract_table_literal, inflate, load_base64,
    load_file, load_source, load_text, summarize,
};

pub type Result<T> = std::result::Result<T, TableError>;
