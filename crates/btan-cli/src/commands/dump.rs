use btan_core::Colors;
use btan_tables::{DumpOptions, SparseTable, TableDiagnostics, dump};

use super::input_loader::{Input, load_tables};

pub struct DumpArgs {
    pub input: Input,
    pub verbose: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let raw = match load_tables(&args.input) {
        Ok(raw) => raw,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let table = SparseTable::new(raw);
    let diagnostics = TableDiagnostics::scan(&table);
    let options = DumpOptions {
        verbose: args.verbose,
        colors: Colors::new(args.color),
    };
    print!("{}", dump(&table, &diagnostics, options));
}
