//! Whitespace, comments, and ellipsis handling.

use memchr::{memchr2, memmem};

use super::Repairer;
use crate::classify;

impl Repairer<'_> {
    /// Emit whitespace and drop comments until neither matches. Returns
    /// whether the cursor moved.
    pub(super) fn parse_whitespace_and_skip_comments(&mut self) -> bool {
        let start = self.i;
        self.parse_whitespace();
        loop {
            if self.parse_comment() {
                self.parse_whitespace();
            } else {
                break;
            }
        }
        self.i > start
    }

    /// Whitespace is copied through verbatim; special Unicode whitespace is
    /// normalized to a single ASCII space.
    fn parse_whitespace(&mut self) -> bool {
        let start = self.i;
        while let Some(c) = self.peek() {
            if classify::is_whitespace(c) {
                self.out.push(c);
            } else if classify::is_special_whitespace(c) {
                self.out.push(' ');
            } else {
                break;
            }
            self.i += c.len_utf8();
        }
        if self.i > start && self.text[start..self.i].chars().any(classify::is_special_whitespace)
        {
            self.log("normalized special whitespace");
        }
        self.i > start
    }

    /// Skip a `/* ... */` or `// ...` comment, emitting nothing. A line
    /// comment ends before its newline so the newline itself is still seen
    /// as whitespace (newline-delimited input detection relies on it).
    fn parse_comment(&mut self) -> bool {
        let rest = &self.text[self.i..];
        if let Some(body) = rest.strip_prefix("/*") {
            self.log("removed block comment");
            self.i += 2 + match memmem::find(body.as_bytes(), b"*/") {
                Some(pos) => pos + 2,
                None => body.len(),
            };
            true
        } else if let Some(body) = rest.strip_prefix("//") {
            self.log("removed line comment");
            self.i += 2 + memchr2(b'\n', b'\r', body.as_bytes()).unwrap_or(body.len());
            true
        } else {
            false
        }
    }

    /// Consume `...` (with optional surrounding whitespace/comments and a
    /// trailing comma) inside an array or object, emitting nothing.
    pub(super) fn skip_ellipsis(&mut self) {
        self.parse_whitespace_and_skip_comments();
        if self.text[self.i..].starts_with("...") {
            self.log("removed ellipsis");
            self.i += 3;
            self.parse_whitespace_and_skip_comments();
            if self.skip_character(',') {
                self.parse_whitespace_and_skip_comments();
            }
        }
    }
}
