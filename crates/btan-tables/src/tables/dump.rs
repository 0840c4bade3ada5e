//! Human-readable table dump for debugging generator output.
//!
//! Sections, in order: `[summary]`, `[notes]` (only with collisions), then in
//! verbose mode the raw arrays (`[lookaheads]`, `[action_offsets]`,
//! `[goto_offsets]`, `[rules]`), the `[offsets]` and `[actions]` grids, and in
//! verbose mode the per-state `[entries]` listing.

use btan_core::Colors;
use btan_core::utils::{grid_cell, value_rows, width_for_count};

use super::diagnostics::TableDiagnostics;
use super::model::{Action, Entry, SparseTable};

/// Grid cell width.
const CELL_WIDTH: usize = 3;
/// Values per line in raw array listings.
const VALUES_PER_LINE: usize = 10;

/// Rendering options.
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    pub verbose: bool,
    pub colors: Colors,
}

/// Render `table` and its diagnostics.
pub fn dump(table: &SparseTable, diagnostics: &TableDiagnostics, options: DumpOptions) -> String {
    let ctx = DumpContext::new(table, options.colors);

    let mut sections = ctx.overview(diagnostics);
    if options.verbose {
        sections.push(ctx.lookaheads());
        sections.push(ctx.action_offsets());
        sections.push(ctx.goto_offsets());
        sections.push(ctx.rules());
    }
    sections.push(ctx.grid("offsets", |state, terminal| {
        table.action_cell(state, terminal).map(|cell| cell as i64)
    }));
    sections.push(ctx.grid("actions", |state, terminal| {
        table
            .action_cell(state, terminal)
            .map(|cell| i64::from(table.raw().actions[cell]))
    }));
    if options.verbose {
        sections.push(ctx.entries(diagnostics));
    }
    join_sections(&sections)
}

/// Render only the `[summary]` and `[notes]` sections.
pub fn summarize(table: &SparseTable, diagnostics: &TableDiagnostics, colors: Colors) -> String {
    let ctx = DumpContext::new(table, colors);
    join_sections(&ctx.overview(diagnostics))
}

/// One blank line between sections, no trailing whitespace.
fn join_sections(sections: &[Vec<String>]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in section {
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

struct DumpContext<'a> {
    table: &'a SparseTable,
    /// Width of the state label column.
    state_width: usize,
    colors: Colors,
}

impl<'a> DumpContext<'a> {
    fn new(table: &'a SparseTable, colors: Colors) -> Self {
        Self {
            table,
            state_width: width_for_count(table.num_states()).max(2),
            colors,
        }
    }

    fn header(&self, name: &str) -> String {
        let c = &self.colors;
        format!("{}[{name}]{}", c.blue, c.reset)
    }

    /// `[summary]`, plus `[notes]` when there are collisions.
    fn overview(&self, diagnostics: &TableDiagnostics) -> Vec<Vec<String>> {
        let mut sections = vec![self.summary()];
        if !diagnostics.collisions.is_empty() {
            sections.push(self.notes(diagnostics));
        }
        sections
    }

    fn summary(&self) -> Vec<String> {
        let summary = self.table.summary();
        let defaults = match &self.table.raw().default_actions {
            Some(d) => d.len().to_string(),
            None => "none".to_string(),
        };
        let rows = [
            ("terminals", summary.symbols.num_terminals.to_string()),
            ("max_nonterminal", summary.symbols.max_nonterminal_id.to_string()),
            ("nonterminals", summary.symbols.num_nonterminals.to_string()),
            ("states", summary.num_states.to_string()),
            ("rules", summary.num_rules.to_string()),
            ("table_size", summary.table_size.to_string()),
            ("default_actions", defaults),
            ("error_symbol", summary.error_symbol_id.to_string()),
        ];

        let mut lines = vec![self.header("summary")];
        lines.extend(rows.iter().map(|(key, value)| format!("{key:<15} = {value}")));
        lines
    }

    fn notes(&self, diagnostics: &TableDiagnostics) -> Vec<String> {
        let c = &self.colors;
        let mut lines = vec![self.header("notes")];
        lines.extend(
            diagnostics
                .collisions
                .iter()
                .map(|note| format!("{}NOTE:{} {note}", c.yellow, c.reset)),
        );
        lines
    }

    fn lookaheads(&self) -> Vec<String> {
        let mut lines = vec![self.header("lookaheads")];
        lines.extend(value_rows(&self.table.raw().lookaheads, VALUES_PER_LINE));
        lines
    }

    fn action_offsets(&self) -> Vec<String> {
        let mut lines = vec![self.header("action_offsets")];
        lines.extend(value_rows(&self.table.raw().action_offsets, VALUES_PER_LINE));
        lines
    }

    fn goto_offsets(&self) -> Vec<String> {
        let mut lines = vec![self.header("goto_offsets")];
        lines.extend(value_rows(&self.table.raw().goto_offsets, VALUES_PER_LINE));
        lines
    }

    fn rules(&self) -> Vec<String> {
        let mut lines = vec![self.header("rules")];
        lines.extend(
            self.table
                .raw()
                .rules()
                .enumerate()
                .map(|(i, rule)| format!("{i} -> {} ({})", rule.nonterminal, rule.rhs_len)),
        );
        lines
    }

    /// State × terminal grid; `cell` yields the value to show, if any.
    fn grid(&self, name: &str, cell: impl Fn(usize, usize) -> Option<i64>) -> Vec<String> {
        let c = &self.colors;
        let sw = self.state_width;
        let terminals = self.table.symbols().num_terminals;

        let mut lines = vec![self.header(name)];
        let mut head = " ".repeat(sw + 3);
        for terminal in 0..terminals {
            head.push_str(&grid_cell(Some(terminal), CELL_WIDTH));
        }
        lines.push(format!("{}{head}{}", c.dim, c.reset));

        for state in 0..self.table.num_states() {
            let mut row = format!("{state:>sw$}:  ");
            for terminal in 0..terminals {
                row.push_str(&grid_cell(cell(state, terminal), CELL_WIDTH));
            }
            lines.push(row);
        }
        lines
    }

    fn entries(&self, diagnostics: &TableDiagnostics) -> Vec<String> {
        let c = &self.colors;
        let mut lines = vec![self.header("entries")];

        for state in 0..self.table.num_states() {
            if let Some(start) = self.table.action_offset(state) {
                lines.push(self.state_line(state, start));
                lines.extend(self.table.actions_of(state).map(|e| self.action_line(e)));
            }
            if let Some(start) = self.table.goto_offset(state) {
                lines.push(self.state_line(state, start));
                lines.extend(self.table.gotos_of(state).map(|e| self.goto_line(e)));
            }
        }

        lines.push(format!(
            "{}num action: {}, action table size: {}{}",
            c.dim,
            diagnostics.live_entries(),
            diagnostics.table_size,
            c.reset
        ));
        lines
    }

    fn state_line(&self, state: usize, start: i32) -> String {
        let c = &self.colors;
        format!("{}{state}:{} (start = {start})", c.blue, c.reset)
    }

    fn action_line(&self, entry: Entry) -> String {
        let c = &self.colors;
        let color = match entry.action {
            Action::Shift(_) => c.green,
            _ => c.yellow,
        };
        format!("  {}: {}", entry.symbol, c.paint(color, &entry.action.to_string()))
    }

    fn goto_line(&self, entry: Entry) -> String {
        let c = &self.colors;
        let target = match entry.action {
            Action::Goto(state) => c.paint(c.green, &state.to_string()),
            other => c.paint(c.yellow, &other.to_string()),
        };
        format!("  {} -> {target}", entry.symbol)
    }
}
