//! Decoded parsing tables, exactly as stored in the stream.
//!
//! The derived symbol ranges are recomputed on demand from `rule_info` rather
//! than stored alongside the arrays.

use serde::Serialize;

/// Raw parsing tables in stream order.
///
/// Produced once by [`decode_tables`](super::decode_tables) and never mutated
/// afterwards. `actions`/`lookaheads` and `action_offsets`/`goto_offsets` are
/// parallel arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTableData {
    /// Packed shift/reduce/goto cells.
    pub actions: Vec<i16>,
    /// Owner tag per cell: the symbol id the cell is valid for.
    pub lookaheads: Vec<i16>,
    /// Per-state base offset into `actions` for terminals.
    pub action_offsets: Vec<i32>,
    /// Per-state base offset for nonterminals, relative to `num_terminals`.
    pub goto_offsets: Vec<i32>,
    /// Present only when the stream declared a nonzero count.
    pub default_actions: Option<Vec<i16>>,
    /// Per rule: produced nonterminal (high 16 bits), rhs length (low 16 bits).
    pub rule_info: Vec<i32>,
    pub error_symbol_id: i16,
}

/// One unpacked `rule_info` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleInfo {
    pub nonterminal: u16,
    pub rhs_len: u16,
}

impl RuleInfo {
    pub fn unpack(word: i32) -> Self {
        let word = word as u32;
        Self {
            nonterminal: (word >> 16) as u16,
            rhs_len: (word & 0xFFFF) as u16,
        }
    }
}

/// Symbol id ranges implied by the rules.
///
/// Terminals are `0..num_terminals`, nonterminals
/// `num_terminals..=max_nonterminal_id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SymbolSpace {
    pub num_terminals: usize,
    pub max_nonterminal_id: usize,
    pub num_nonterminals: usize,
}

impl RawTableData {
    /// Offset value marking a state without entries of that kind.
    pub const UNUSED_OFFSET: i32 = i32::MIN;

    pub fn num_states(&self) -> usize {
        self.action_offsets.len()
    }

    pub fn num_rules(&self) -> usize {
        self.rule_info.len()
    }

    /// Unpack rule `index`.
    pub fn rule(&self, index: usize) -> Option<RuleInfo> {
        self.rule_info.get(index).copied().map(RuleInfo::unpack)
    }

    pub fn rules(&self) -> impl Iterator<Item = RuleInfo> + '_ {
        self.rule_info.iter().copied().map(RuleInfo::unpack)
    }

    /// Derive the terminal/nonterminal ranges from the rules.
    ///
    /// The smallest produced nonterminal is the first nonterminal id, so it is
    /// also the terminal count. Without rules every range is empty.
    pub fn symbols(&self) -> SymbolSpace {
        let range = self
            .rules()
            .map(|r| r.nonterminal)
            .fold(None, |acc: Option<(u16, u16)>, nt| match acc {
                None => Some((nt, nt)),
                Some((lo, hi)) => Some((lo.min(nt), hi.max(nt))),
            });

        match range {
            Some((lo, hi)) => SymbolSpace {
                num_terminals: lo as usize,
                max_nonterminal_id: hi as usize,
                num_nonterminals: (hi - lo) as usize + 1,
            },
            None => SymbolSpace::default(),
        }
    }

    /// Raw goto value that means ACCEPT: `!num_rules`.
    pub fn accept_marker(&self) -> i32 {
        !(self.rule_info.len() as i32)
    }

    /// Encode to the big-endian stream layout read by
    /// [`decode_tables`](super::decode_tables).
    pub fn to_bytes(&self) -> Vec<u8> {
        debug_assert_eq!(self.actions.len(), self.lookaheads.len());
        debug_assert_eq!(self.action_offsets.len(), self.goto_offsets.len());

        let mut out = Vec::new();
        put_i32(&mut out, self.actions.len() as i32);
        put_i16s(&mut out, &self.actions);
        put_i16s(&mut out, &self.lookaheads);

        put_i32(&mut out, self.action_offsets.len() as i32);
        put_i32s(&mut out, &self.action_offsets);
        put_i32s(&mut out, &self.goto_offsets);

        let defaults = self.default_actions.as_deref().unwrap_or_default();
        put_i32(&mut out, defaults.len() as i32);
        put_i16s(&mut out, defaults);

        put_i32(&mut out, self.rule_info.len() as i32);
        put_i32s(&mut out, &self.rule_info);

        out.extend_from_slice(&self.error_symbol_id.to_be_bytes());
        out
    }
}

fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_i32s(out: &mut Vec<u8>, values: &[i32]) {
    for &v in values {
        put_i32(out, v);
    }
}

fn put_i16s(out: &mut Vec<u8>, values: &[i16]) {
    for &v in values {
        out.extend_from_slice(&v.to_be_bytes());
    }
}
