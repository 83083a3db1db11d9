//! Where the pager's items come from: a file, stdin or a synthetic range.

use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading items: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON input must be an array, found {0}")]
    NotAnArray(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    /// `Item 1` .. `Item n`.
    Count(usize),
}

impl Source {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::File(PathBuf::from(arg))
        }
    }
}

/// One item per line; a trailing newline does not add an empty item.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Items from a JSON array. Strings are taken verbatim, other values are
/// rendered as compact JSON.
pub fn parse_json_items(s: &str) -> Result<Vec<String>, SourceError> {
    match serde_json::from_str::<Value>(s)? {
        Value::Array(values) => Ok(values
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()),
        Value::Null => Err(SourceError::NotAnArray("null")),
        Value::Bool(_) => Err(SourceError::NotAnArray("a boolean")),
        Value::Number(_) => Err(SourceError::NotAnArray("a number")),
        Value::String(_) => Err(SourceError::NotAnArray("a string")),
        Value::Object(_) => Err(SourceError::NotAnArray("an object")),
    }
}

pub fn synthetic_items(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Item {i}")).collect()
}

pub fn load_items(source: &Source, json: bool) -> Result<Vec<String>, SourceError> {
    let text = match source {
        Source::Count(n) => return Ok(synthetic_items(*n)),
        Source::File(path) => {
            if !json {
                let file = std::fs::File::open(path)?;
                return Ok(read_lines(io::BufReader::new(file))?);
            }
            std::fs::read_to_string(path)?
        }
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            if !json {
                return Ok(read_lines(buf.as_bytes())?);
            }
            buf
        }
    };
    parse_json_items(&text)
}
