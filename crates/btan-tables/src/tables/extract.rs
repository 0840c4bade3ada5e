//! Locating the embedded table literal in generated parser source.

use super::error::TableError;

/// Token sequence that introduces the table literal.
pub const MARKER: &str = "new ParsingTables(";

/// Extract the base64 table text from generated parser source.
///
/// The generator may split the literal into several adjacent quoted
/// segments; they are concatenated. Collection stops at the `);` closing the
/// constructor call.
pub fn extract_table_literal(source: &str) -> Result<String, TableError> {
    let start = source.find(MARKER).ok_or(TableError::NotAParserFile)?;
    let mut rest = &source[start..];
    let mut literal = String::new();

    loop {
        let Some(open) = rest.find('"') else { break };
        match rest.find(");") {
            Some(stop) if stop > open => {}
            _ => break,
        }
        let body = &rest[open + 1..];
        let Some(close) = body.find('"') else { break };
        literal.push_str(&body[..close]);
        rest = &body[close + 1..];
    }

    tracing::debug!(len = literal.len(), "extracted table literal");
    Ok(literal)
}
