//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use clap::ArgMatches;
use tracing::Level;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::extract::ExtractArgs;
use crate::commands::input_loader::Input;

pub struct DumpParams {
    pub input: String,
    pub verbose: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            verbose: m.get_flag("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: Input::parse(&p.input),
            verbose: p.verbose,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: String,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: Input::parse(&p.input),
            json: p.json,
            // JSON output is never colored.
            color: !p.json && p.color.should_colorize(),
        }
    }
}

pub struct ExtractParams {
    pub input: String,
}

impl ExtractParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
        }
    }
}

impl From<ExtractParams> for ExtractArgs {
    fn from(p: ExtractParams) -> Self {
        Self {
            input: Input::parse(&p.input),
        }
    }
}

fn parse_input(m: &ArgMatches) -> String {
    m.get_one::<String>("input").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Maximum level for the stderr log subscriber.
pub fn log_level(m: &ArgMatches) -> Level {
    m.get_one::<String>("log")
        .and_then(|s| s.parse().ok())
        .unwrap_or(Level::WARN)
}
