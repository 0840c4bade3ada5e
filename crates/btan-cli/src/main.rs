mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ExtractParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    // Logs go to stderr so they never interleave with the report.
    tracing_subscriber::fmt()
        .with_max_level(log_level(m))
        .with_writer(std::io::stderr)
        .init();

    match name {
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "extract" => {
            let params = ExtractParams::from_matches(m);
            commands::extract::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
