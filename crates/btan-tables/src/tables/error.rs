//! Errors raised while decoding parsing tables.

use std::fmt;
use std::io;

/// A field of the binary table schema, in stream order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    NumActions,
    Actions,
    Lookaheads,
    NumOffsets,
    ActionOffsets,
    GotoOffsets,
    NumDefaultActions,
    DefaultActions,
    NumRules,
    RuleInfo,
    ErrorSymbolId,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::NumActions => "num_actions",
            Field::Actions => "actions",
            Field::Lookaheads => "lookaheads",
            Field::NumOffsets => "num_offsets",
            Field::ActionOffsets => "action_offsets",
            Field::GotoOffsets => "goto_offsets",
            Field::NumDefaultActions => "num_default_actions",
            Field::DefaultActions => "default_actions",
            Field::NumRules => "num_rules",
            Field::RuleInfo => "rule_info",
            Field::ErrorSymbolId => "error_symbol_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Table decode error.
///
/// Every variant is fatal: decoding stops and no partial tables are returned.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("unexpected base64 character {ch:?} at position {position}")]
    InvalidEncoding { ch: char, position: usize },
    #[error(
        "unexpected end of stream while reading {field}: needed {needed} bytes, {remaining} remaining"
    )]
    UnexpectedEndOfStream {
        field: Field,
        needed: usize,
        remaining: usize,
    },
    #[error("invalid {field} count: {count}")]
    InvalidCount { field: Field, count: i32 },
    #[error("input does not look like a generated Beaver parser (no `new ParsingTables(`)")]
    NotAParserFile,
    #[error("decompression failed: {0}")]
    Decompress(#[source] io::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
