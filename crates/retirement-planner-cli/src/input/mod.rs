pub mod file;

use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read command input from `--input <file>` or, failing that, piped stdin.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
    purpose: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return file::read_input_file(path);
    }
    match read_stdin()? {
        Some(text) => parse_piped(&text),
        None => Err(format!("--input <file.json|file.yaml> or stdin required for {purpose}").into()),
    }
}

/// Piped input is JSON unless it fails to parse as such, then YAML.
fn parse_piped<T: DeserializeOwned>(text: &str) -> Result<T, Box<dyn std::error::Error>> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            log::debug!("stdin is not JSON ({json_err}), trying YAML");
            serde_yaml::from_str(text)
                .map_err(|e| format!("Failed to parse stdin as JSON or YAML: {e}").into())
        }
    }
}

/// Read piped stdin. Returns None if stdin is a TTY (interactive) or empty.
fn read_stdin() -> Result<Option<String>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}
