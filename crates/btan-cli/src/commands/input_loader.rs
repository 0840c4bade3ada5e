use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use btan_tables::{
    RawTableData, TableError, extract_table_literal, load_base64, load_file, load_text,
};

/// Where the tables come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Generated parser source on disk.
    File(PathBuf),
    /// Parser source (or bare table text) on stdin.
    Stdin,
    /// Encoded table text given on the command line.
    Inline(String),
}

impl Input {
    /// `-` is stdin, an existing file is read, anything else is table text.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            return Input::Stdin;
        }
        let path = Path::new(arg);
        if path.is_file() {
            return Input::File(path.to_path_buf());
        }
        Input::Inline(arg.trim().to_string())
    }

    pub fn describe(&self) -> String {
        match self {
            Input::File(path) => format!("'{}'", path.display()),
            Input::Stdin => "<stdin>".to_string(),
            Input::Inline(_) => "inline text".to_string(),
        }
    }
}

pub fn read_input(input: &Input) -> Result<String, String> {
    let text = match input {
        Input::File(path) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?,
        Input::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            buf
        }
        Input::Inline(text) => text.clone(),
    };
    tracing::debug!(input = %input.describe(), len = text.len(), "read input");
    Ok(text)
}

/// Decode tables from `input`.
///
/// File and stdin text holding the table constructor is treated as parser
/// source; otherwise the whole text is taken as the encoded tables.
pub fn load_tables(input: &Input) -> Result<RawTableData, String> {
    match input {
        Input::File(path) => load_file(path).map_err(|e| load_error(input, e)),
        _ => decode_text(input, &read_input(input)?),
    }
}

/// Decode text already read from `input`.
pub fn decode_text(input: &Input, text: &str) -> Result<RawTableData, String> {
    let result = match input {
        Input::Inline(_) => load_base64(text),
        _ => load_text(text),
    };
    result.map_err(|e| load_error(input, e))
}

fn load_error(input: &Input, err: TableError) -> String {
    format!("failed to load tables from {}: {}", input.describe(), err)
}

/// The encoded table text embedded in `input`.
pub fn load_literal(input: &Input) -> Result<String, String> {
    let text = read_input(input)?;
    extract_table_literal(&text).map_err(|e| format!("{}: {}", input.describe(), e))
}
