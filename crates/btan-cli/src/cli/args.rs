//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Table input (positional): parser source file, `-` for stdin, or base64 text.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .help("Generated parser source, '-' for stdin, or encoded table text")
}

/// Generated parser source (positional), for `extract`.
pub fn file_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .required(true)
        .help("Generated parser source, or '-' for stdin")
}

/// Verbose report (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Include raw arrays, rules and per-state entries")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the summary and notes as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Log verbosity on stderr (--log).
pub fn log_arg() -> Arg {
    Arg::new("log")
        .long("log")
        .value_name("LEVEL")
        .default_value("warn")
        .value_parser(["error", "warn", "info", "debug", "trace"])
        .help("Log level for diagnostics on stderr")
}
