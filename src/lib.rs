//! Repair malformed JSON-like text into strictly valid JSON.
//!
//! `jsonmend` accepts the kind of "almost JSON" that lenient producers emit
//! (JavaScript object literals, Python `repr` output, MongoDB shell dumps,
//! JSONP responses, truncated logs) and rewrites it into JSON that a strict
//! parser accepts. It fixes unquoted keys, single and fancy quotes, missing
//! commas/colons/brackets, trailing commas, comments, ellipses, concatenated
//! strings, truncated numbers and strings, Python keywords, and
//! newline-delimited JSON (wrapped into an array).
//!
//! The engine is a single-pass recursive-descent parser that emits output as
//! it reads and back-patches already-emitted text when it discovers a
//! mistake only after committing to it. Recursion depth equals the nesting
//! depth of the input; inputs nested deeper than the thread stack allows are
//! not supported.

mod classify;
pub mod cli;
pub mod error;
mod log;
mod parser;
mod patch;
pub mod stream;

pub use error::{RepairError, RepairErrorKind};
pub use log::RepairLogEntry;
pub use stream::{StreamOptions, StreamRepairer};

use std::io::Write;

/// Repair a potentially malformed JSON string into a valid JSON string.
///
/// Returns an error only for conditions the parser cannot recover from,
/// with the byte offset at which repair became impossible.
///
/// # Examples
///
/// ```
/// let repaired = jsonmend::repair("{name: 'John', age: 30,}")?;
/// assert_eq!(repaired, r#"{"name": "John", "age": 30}"#);
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
pub fn repair(input: &str) -> Result<String, RepairError> {
    parser::repair(input)
}

/// Repair a string and return both the result and a log of every repair
/// that was applied.
///
/// # Examples
///
/// ```
/// let (out, log) = jsonmend::repair_with_log("[1, 2, 3,]")?;
/// assert_eq!(out, "[1, 2, 3]");
/// assert!(log.iter().any(|e| e.message.contains("trailing comma")));
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
pub fn repair_with_log(input: &str) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    parser::repair_with_log(input)
}

/// Repair a string and write the result into an [`io::Write`](std::io::Write).
///
/// Repair failures surface as [`std::io::ErrorKind::InvalidData`].
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// jsonmend::repair_to_writer("{a:1}", &mut out)?;
/// assert_eq!(out, br#"{"a":1}"#);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn repair_to_writer<W: Write>(input: &str, writer: &mut W) -> std::io::Result<()> {
    let repaired =
        repair(input).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    writer.write_all(repaired.as_bytes())
}

/// Repair a sequence of UTF-8 chunks with the streaming engine and collect
/// the output into one string.
///
/// # Examples
///
/// ```
/// use jsonmend::StreamOptions;
///
/// let out = jsonmend::repair_chunks_to_string(["{a:", "1}"], &StreamOptions::default())?;
/// assert_eq!(out, r#"{"a":1}"#);
/// # Ok::<(), jsonmend::RepairError>(())
/// ```
pub fn repair_chunks_to_string<'a, I>(chunks: I, opts: &StreamOptions) -> Result<String, RepairError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut repairer = StreamRepairer::new(opts.clone());
    let mut out = String::new();
    for chunk in chunks {
        if let Some(s) = repairer.push(chunk)? {
            out.push_str(&s);
        }
    }
    if let Some(tail) = repairer.flush()? {
        out.push_str(&tail);
    }
    Ok(out)
}

/// Repair and parse into a [`serde_json::Value`].
///
/// # Examples
///
/// ```
/// let value = jsonmend::repair_to_value("{name: 'John', age: 30}")?;
/// assert_eq!(value["name"], "John");
/// assert_eq!(value["age"], 30);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "serde")]
pub fn repair_to_value(input: &str) -> Result<serde_json::Value, RepairError> {
    let repaired = repair(input)?;
    serde_json::from_str(&repaired).map_err(|e| {
        RepairError::new(RepairErrorKind::Parse(format!("parse error: {e}")), e.column())
    })
}

#[cfg(test)]
mod tests;
