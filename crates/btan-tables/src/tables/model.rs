//! Query interface over offset-compressed action/goto tables.
//!
//! All rows share one physical array. A state's row starts at its base offset
//! (possibly negative) and a cell belongs to the row only when its lookahead
//! tag equals the symbol being looked up. Goto rows live in the same array,
//! shifted past the terminal ids, so their tags are nonterminal ids.

use std::fmt;

use serde::Serialize;

use super::raw::{RawTableData, SymbolSpace};

/// Which half of the symbol space a cell was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Terminal lookup: sign selects shift or reduce.
    Action,
    /// Nonterminal lookup: `accept` is the raw value meaning ACCEPT.
    Goto { accept: i32 },
}

/// A decoded table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// No live cell for this state and symbol.
    Absent,
    Shift(u16),
    Reduce(u16),
    /// Target state as stored; the generator never stores negative targets
    /// other than the accept marker.
    Goto(i16),
    Accept,
}

impl Action {
    /// Decode the raw value of a live cell.
    ///
    /// Action cells: `v >= 0` shifts to state `v`, `v < 0` reduces by rule
    /// `!v`. Goto cells: the accept marker accepts, anything else is a goto.
    pub fn decode(raw: i16, kind: CellKind) -> Self {
        match kind {
            CellKind::Action if raw >= 0 => Action::Shift(raw as u16),
            CellKind::Action => Action::Reduce(!raw as u16),
            CellKind::Goto { accept } if i32::from(raw) == accept => Action::Accept,
            CellKind::Goto { .. } => Action::Goto(raw),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Action::Absent)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Absent => Ok(()),
            Action::Shift(state) => write!(f, "SHIFT {state}"),
            Action::Reduce(rule) => write!(f, "REDUCE {rule}"),
            Action::Goto(state) => write!(f, "GOTO {state}"),
            Action::Accept => f.write_str("ACCEPT"),
        }
    }
}

/// A live cell of one state's row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Symbol id (terminal for actions, nonterminal for gotos).
    pub symbol: usize,
    /// Physical index into `actions`.
    pub cell: usize,
    pub action: Action,
}

/// Read-only view of decoded tables as a sparse state × symbol table.
#[derive(Clone, Debug)]
pub struct SparseTable {
    raw: RawTableData,
    symbols: SymbolSpace,
}

impl From<RawTableData> for SparseTable {
    fn from(raw: RawTableData) -> Self {
        Self::new(raw)
    }
}

impl SparseTable {
    pub fn new(raw: RawTableData) -> Self {
        let symbols = raw.symbols();
        Self { raw, symbols }
    }

    pub fn raw(&self) -> &RawTableData {
        &self.raw
    }

    pub fn symbols(&self) -> SymbolSpace {
        self.symbols
    }

    pub fn num_states(&self) -> usize {
        self.raw.num_states()
    }

    /// Physical size of the shared cell array.
    pub fn table_size(&self) -> usize {
        self.raw.actions.len()
    }

    /// Action base offset of `state`, `None` when unused or out of range.
    pub fn action_offset(&self, state: usize) -> Option<i32> {
        used(self.raw.action_offsets.get(state).copied())
    }

    /// Goto base offset of `state`, `None` when unused or out of range.
    pub fn goto_offset(&self, state: usize) -> Option<i32> {
        used(self.raw.goto_offsets.get(state).copied())
    }

    /// Cell index holding the action for `terminal` in `state`, if live.
    pub fn action_cell(&self, state: usize, terminal: usize) -> Option<usize> {
        let offset = self.action_offset(state)?;
        self.live_cell(i64::from(offset), terminal)
    }

    /// Cell index holding the goto for the `index`-th nonterminal in `state`.
    pub fn goto_cell(&self, state: usize, index: usize) -> Option<usize> {
        let offset = self.goto_offset(state)?;
        self.live_cell(i64::from(offset), self.symbols.num_terminals + index)
    }

    /// Action for `terminal` in `state`.
    pub fn action(&self, state: usize, terminal: usize) -> Action {
        match self.action_cell(state, terminal) {
            Some(cell) => Action::decode(self.raw.actions[cell], CellKind::Action),
            None => Action::Absent,
        }
    }

    /// Goto for the `index`-th nonterminal (symbol `num_terminals + index`).
    pub fn goto(&self, state: usize, index: usize) -> Action {
        match self.goto_cell(state, index) {
            Some(cell) => Action::decode(self.raw.actions[cell], self.goto_kind()),
            None => Action::Absent,
        }
    }

    /// Live action entries of `state`, in terminal order.
    pub fn actions_of(&self, state: usize) -> impl Iterator<Item = Entry> + '_ {
        (0..self.symbols.num_terminals).filter_map(move |terminal| {
            let cell = self.action_cell(state, terminal)?;
            Some(Entry {
                symbol: terminal,
                cell,
                action: Action::decode(self.raw.actions[cell], CellKind::Action),
            })
        })
    }

    /// Live goto entries of `state`, in nonterminal order.
    pub fn gotos_of(&self, state: usize) -> impl Iterator<Item = Entry> + '_ {
        let kind = self.goto_kind();
        (0..self.symbols.num_nonterminals).filter_map(move |index| {
            let cell = self.goto_cell(state, index)?;
            Some(Entry {
                symbol: self.symbols.num_terminals + index,
                cell,
                action: Action::decode(self.raw.actions[cell], kind),
            })
        })
    }

    fn goto_kind(&self) -> CellKind {
        CellKind::Goto {
            accept: self.raw.accept_marker(),
        }
    }

    /// Resolve `offset + symbol` to a cell owned by `symbol`.
    ///
    /// Goto offsets are stored relative to the first nonterminal, and goto
    /// symbols are nonterminal ids, so both kinds address `offset + symbol`.
    /// The row window may start before index 0 or run past the end; only
    /// cells that land in range and carry the symbol's tag are live.
    fn live_cell(&self, offset: i64, symbol: usize) -> Option<usize> {
        let index = usize::try_from(offset + symbol as i64).ok()?;
        let tag = *self.raw.lookaheads.get(index)?;
        (i64::from(tag) == symbol as i64 && index < self.raw.actions.len()).then_some(index)
    }
}

fn used(offset: Option<i32>) -> Option<i32> {
    offset.filter(|&o| o != RawTableData::UNUSED_OFFSET)
}

/// Headline numbers of a decoded table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    #[serde(flatten)]
    pub symbols: SymbolSpace,
    pub num_states: usize,
    pub num_rules: usize,
    pub table_size: usize,
    pub error_symbol_id: i16,
    pub default_actions: bool,
}

impl SparseTable {
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            symbols: self.symbols,
            num_states: self.num_states(),
            num_rules: self.raw.num_rules(),
            table_size: self.table_size(),
            error_symbol_id: self.raw.error_symbol_id,
            default_actions: self.raw.default_actions.is_some(),
        }
    }
}
