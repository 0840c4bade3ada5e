//! Fixture builders shared by the table tests.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use super::raw::RawTableData;

const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$";

/// Encode bytes with the Beaver base64 alphabet, without padding.
pub fn encode_base64(bytes: &[u8]) -> String {
    let mut out = String::new();
    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let symbols = [b0 >> 2, (b0 & 0x03) << 4 | b1 >> 4, (b1 & 0x0F) << 2 | b2 >> 6, b2 & 0x3F];
        for &s in &symbols[..chunk.len() + 1] {
            out.push(ALPHABET[s as usize] as char);
        }
    }
    out
}

/// Zlib-compress bytes the way the generator does.
pub fn zlib(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

/// Serialize, compress and base64-encode tables.
pub fn encode_tables(tables: &RawTableData) -> String {
    encode_base64(&zlib(&tables.to_bytes()))
}

/// Two terminals, one state: `0 -> SHIFT 5`, `1 -> REDUCE 2`.
pub fn two_cell_tables() -> RawTableData {
    RawTableData {
        actions: vec![5, -3],
        lookaheads: vec![0, 1],
        action_offsets: vec![0],
        goto_offsets: vec![RawTableData::UNUSED_OFFSET],
        default_actions: None,
        rule_info: vec![rule(2, 1), rule(2, 3), rule(3, 0)],
        error_symbol_id: 1,
    }
}

/// A small grammar with overlapping rows, gotos and an accept cell.
///
/// Terminals `0..3`, nonterminals `3..5`, four rules (accept marker `!4 = -5`).
///
/// | cell | 0  | 1 | 2 | 3  | 4  | 5 | 6  | 7 | 8 |
/// |------|----|---|---|----|----|---|----|---|---|
/// | act  | -2 | 2 | 1 | -1 | -5 | 3 | -4 | 3 | 4 |
/// | la   | 2  | 0 | 1 | 2  | 3  | 4 | 1  | 0 | 3 |
///
/// - state 0: actions at 1 (SHIFT 2, SHIFT 1, REDUCE 0), gotos at 1
///   (3 -> ACCEPT, 4 -> GOTO 3)
/// - state 1: actions at -2, only terminal 2 lands in range (REDUCE 1)
/// - state 2: actions at 7 (terminal 0: SHIFT 3), gotos at 5 (3 -> GOTO 4)
/// - state 3: actions at 5, only terminal 1 is tagged for it (REDUCE 3)
/// - state 4: shares state 0's action offset
pub fn sample_tables() -> RawTableData {
    let unused = RawTableData::UNUSED_OFFSET;
    RawTableData {
        actions: vec![-2, 2, 1, -1, -5, 3, -4, 3, 4],
        lookaheads: vec![2, 0, 1, 2, 3, 4, 1, 0, 3],
        action_offsets: vec![1, -2, 7, 5, 1],
        goto_offsets: vec![1, unused, 5, unused, unused],
        default_actions: Some(vec![0, 0, 0, 0, 0]),
        rule_info: vec![rule(3, 1), rule(4, 2), rule(4, 1), rule(3, 3)],
        error_symbol_id: 2,
    }
}

/// Pack a rule info word.
pub fn rule(nonterminal: u16, rhs_len: u16) -> i32 {
    ((nonterminal as u32) << 16 | rhs_len as u32) as i32
}
