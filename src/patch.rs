//! Back-patch edits applied to already-emitted output.
//!
//! The repair parser appends output as it reads and occasionally has to
//! correct a decision after the fact. These three primitives are the only
//! edits it ever needs: strip the last occurrence of a character, insert
//! just before the trailing whitespace, and remove a character at a known
//! offset. All of them operate on char boundaries.

/// Remove the last occurrence of `target`. With `strip_remaining`, everything
/// after the occurrence is dropped as well.
pub(crate) fn strip_last_occurrence(s: &mut String, target: char, strip_remaining: bool) {
    if let Some(idx) = s.rfind(target) {
        if strip_remaining {
            s.truncate(idx);
        } else {
            s.remove(idx);
        }
    }
}

/// Insert `insert` before the trailing run of ASCII whitespace, so splices
/// like a missing comma land where pretty-printed output expects them.
pub(crate) fn insert_before_last_whitespace(s: &mut String, insert: &str) {
    let idx = s.trim_end_matches([' ', '\t', '\n', '\r']).len();
    if idx == s.len() {
        s.push_str(insert);
    } else {
        s.insert_str(idx, insert);
    }
}

/// Remove the single character starting at byte `index`.
pub(crate) fn remove_at_index(s: &mut String, index: usize) {
    if index < s.len() {
        s.remove(index);
    }
}

/// Whether the output, ignoring trailing spaces/tabs/CR, ends with a comma
/// or a newline. Drives newline-delimited JSON detection.
pub(crate) fn ends_with_comma_or_newline(s: &str) -> bool {
    let trimmed = s.trim_end_matches([' ', '\t', '\r']);
    trimmed.ends_with(',') || trimmed.ends_with('\n')
}

/// Append `s` as a JSON string literal, escaping quotes, backslashes and
/// control characters. Safe runs are flushed in slices.
pub(crate) fn push_json_string(out: &mut String, s: &str) {
    out.push('"');
    let mut start = 0usize;
    for (i, ch) in s.char_indices() {
        let escape: Option<&str> = match ch {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            c if c < '\u{20}' => None, // handled below
            _ => continue,
        };
        if i > start {
            out.push_str(&s[start..i]);
        }
        match escape {
            Some(esc) => out.push_str(esc),
            None => match crate::classify::control_escape(ch) {
                Some(esc) => out.push_str(esc),
                None => {
                    use std::fmt::Write;
                    let _ = write!(out, "\\u{:04x}", ch as u32);
                }
            },
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.push_str(&s[start..]);
    }
    out.push('"');
}
