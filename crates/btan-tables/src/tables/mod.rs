//! Serialized parser tables.
//!
//! Loading runs text through three layers: the Beaver base64 alphabet, a zlib
//! stream, then a fixed big-endian schema of counts and arrays. The decoded
//! [`RawTableData`] is wrapped in a [`SparseTable`] for lookups.

mod base64;
mod decode;
mod diagnostics;
mod dump;
mod error;
mod extract;
mod load;
mod model;
mod raw;
mod reader;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod model_tests;
#[cfg(test)]
mod raw_tests;

pub use base64::{decode_base64, decoded_len};
pub use decode::decode_tables;
pub use diagnostics::{OffsetCollision, TableDiagnostics};
pub use dump::{DumpOptions, dump, summarize};
pub use error::{Field, TableError};
pub use extract::{MARKER, extract_table_literal};
pub use load::{inflate, load_base64, load_file, load_source, load_text};
pub use model::{Action, CellKind, Entry, SparseTable, TableSummary};
pub use raw::{RawTableData, RuleInfo, SymbolSpace};
pub use reader::ByteReader;
