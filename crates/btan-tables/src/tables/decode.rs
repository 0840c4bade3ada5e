//! Stream decoder for the fixed parsing-table schema.
//!
//! Field order (all big-endian, signed):
//! `num_actions:i32 actions:[i16] lookaheads:[i16]`
//! `num_offsets:i32 action_offsets:[i32] goto_offsets:[i32]`
//! `num_default_actions:i32 default_actions:[i16]`
//! `num_rules:i32 rule_info:[i32]`
//! `error_symbol_id:i16`

use super::error::{Field, TableError};
use super::raw::RawTableData;
use super::reader::ByteReader;

/// Decode tables from a decompressed stream.
///
/// Reads strictly in schema order and fails on the first short or negative
/// field. Bytes after `error_symbol_id` are ignored.
pub fn decode_tables(bytes: &[u8]) -> Result<RawTableData, TableError> {
    let mut r = ByteReader::new(bytes);

    let num_actions = r.read_count(Field::NumActions)?;
    let actions = r.read_i16_array(num_actions, Field::Actions)?;
    let lookaheads = r.read_i16_array(num_actions, Field::Lookaheads)?;
    tracing::debug!(num_actions, "decoded action cells");

    let num_offsets = r.read_count(Field::NumOffsets)?;
    let action_offsets = r.read_i32_array(num_offsets, Field::ActionOffsets)?;
    let goto_offsets = r.read_i32_array(num_offsets, Field::GotoOffsets)?;
    tracing::debug!(num_states = num_offsets, "decoded state offsets");

    // A nonzero count is the only signal that default actions are present.
    let num_default_actions = r.read_count(Field::NumDefaultActions)?;
    let default_actions = if num_default_actions != 0 {
        Some(r.read_i16_array(num_default_actions, Field::DefaultActions)?)
    } else {
        None
    };

    let num_rules = r.read_count(Field::NumRules)?;
    let rule_info = r.read_i32_array(num_rules, Field::RuleInfo)?;
    tracing::debug!(num_rules, "decoded rule info");

    let error_symbol_id = r.read_i16(Field::ErrorSymbolId)?;

    if r.remaining() > 0 {
        tracing::debug!(trailing = r.remaining(), "ignoring bytes after tables");
    }

    Ok(RawTableData {
        actions,
        lookaheads,
        action_offsets,
        goto_offsets,
        default_actions,
        rule_info,
        error_symbol_id,
    })
}

impl RawTableData {
    /// Decode tables from a decompressed stream. See [`decode_tables`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        decode_tables(bytes)
    }
}
