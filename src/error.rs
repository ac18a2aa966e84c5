use thiserror::Error;

/// The condition that made repair impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairErrorKind {
    /// Input is empty or contains only whitespace and comments.
    #[error("unexpected end of json input")]
    UnexpectedEnd,
    /// Content remains after the root value and its tolerated trailing garbage.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// Inside an object, a position requires a key and no key-like token follows.
    #[error("object key expected")]
    ObjectKeyExpected,
    /// After an object key, neither a colon nor a value-start follows.
    #[error("colon expected")]
    ColonExpected,
    /// A control or otherwise invalid character appears inside a string.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    /// `\u` followed by fewer than 4 hex digits while input continues.
    #[error("invalid unicode escape")]
    InvalidUnicodeCharacter,
    /// Streaming only: a single value outgrew the configured window.
    #[error("buffered text exceeds the configured window")]
    BufferExceeded,
    /// Wrapper failures outside the repair parser itself, e.g. the repaired
    /// output failing to parse into a `serde_json::Value`.
    #[error("{0}")]
    Parse(String),
}

/// A fatal repair error. `position` is the 0-based byte offset into the
/// input at which the condition was detected; for end-of-input conditions
/// it equals the input length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}
