//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("btan")
        .about("Inspect compressed Beaver LALR(1) parsing tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(extract_command())
}

/// Full table report.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show decoded parsing tables")
        .override_usage(
            "\
  btan dump <INPUT>
  btan dump <INPUT> -v
  btan dump - < Parser.java",
        )
        .after_help(
            r#"EXAMPLES:
  btan dump Parser.java               # summary, notes, offset and action grids
  btan dump Parser.java -v            # also raw arrays, rules and entries
  btan dump 'UDfZO61W...'             # encoded table text directly
  cat Parser.java | btan dump -       # read source from stdin"#,
        )
        .arg(input_arg())
        .arg(verbose_arg())
        .arg(color_arg())
        .arg(log_arg())
}

/// Decode and report headline numbers.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Decode tables and report summary and notes")
        .override_usage(
            "\
  btan check <INPUT>
  btan check <INPUT> --json",
        )
        .after_help(
            r#"EXAMPLES:
  btan check Parser.java              # summary and offset collisions
  btan check Parser.java --json       # machine-readable report"#,
        )
        .arg(input_arg())
        .arg(json_arg())
        .arg(color_arg())
        .arg(log_arg())
}

/// Print the embedded table text.
pub fn extract_command() -> Command {
    Command::new("extract")
        .about("Print the encoded table text from generated parser source")
        .override_usage("  btan extract <FILE>")
        .after_help(
            r#"EXAMPLES:
  btan extract Parser.java            # print the table literal
  btan extract - < Parser.java        # read source from stdin"#,
        )
        .arg(file_arg())
        .arg(log_arg())
}
