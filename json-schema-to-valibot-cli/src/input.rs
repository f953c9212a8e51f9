//! Input resolution: inline JSON, a schema file path, or piped stdin.

use std::io::{IsTerminal, Read};
use std::path::Path;

use json_schema_to_valibot::SchemaNode;
use serde_json::Value;

use crate::error::{CliError, CliResult};

/// Reads piped stdin to a string. Returns `None` on an interactive
/// terminal, where nothing is piped.
pub fn read_piped_input() -> CliResult<Option<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

/// Interprets `input` as inline JSON first; anything that does not parse
/// is treated as a path to a schema file.
pub fn parse_or_read_json(input: &str) -> CliResult<SchemaNode> {
    let value: Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(_) => {
            let path = Path::new(input);
            let contents =
                std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                    path: path.to_path_buf(),
                    source,
                })?;
            serde_json::from_str(&contents)?
        }
    };
    Ok(SchemaNode::from_value(&value)?)
}
