use btan_core::Colors;
use btan_tables::{OffsetCollision, SparseTable, TableDiagnostics, TableSummary, summarize};
use serde::Serialize;

use super::input_loader::{Input, load_tables};

pub struct CheckArgs {
    pub input: Input,
    pub json: bool,
    pub color: bool,
}

/// Machine-readable `check` output.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub summary: TableSummary,
    pub live_actions: usize,
    pub live_gotos: usize,
    pub notes: Vec<String>,
    pub collisions: Vec<OffsetCollision>,
}

impl CheckReport {
    pub fn new(table: &SparseTable, diagnostics: TableDiagnostics) -> Self {
        Self {
            summary: table.summary(),
            live_actions: diagnostics.live_actions,
            live_gotos: diagnostics.live_gotos,
            notes: diagnostics.collisions.iter().map(|c| c.to_string()).collect(),
            collisions: diagnostics.collisions,
        }
    }
}

pub fn run(args: CheckArgs) {
    let raw = match load_tables(&args.input) {
        Ok(raw) => raw,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let table = SparseTable::new(raw);
    let diagnostics = TableDiagnostics::scan(&table);

    if args.json {
        let report = CheckReport::new(&table, diagnostics);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", summarize(&table, &diagnostics, Colors::new(args.color)));
}
