//! The string recognizer, by far the most intricate piece of the parser.
//!
//! It runs in one of two modes. *Greedy* (the default) reads up to a closing
//! quote of the opener's family and repairs what it meets along the way.
//! When the greedy attempt discovers, too late, that the closing quote was
//! missing, it rewinds input and output to a checkpoint taken before the
//! string started and retries in *stop-at-delimiter* mode, where the next
//! structural delimiter marks where the missing quote belongs.

use super::Repairer;
use crate::classify;
use crate::error::{RepairError, RepairErrorKind};
use crate::patch;

impl Repairer<'_> {
    pub(super) fn parse_string(&mut self, stop_at_delimiter: bool) -> Result<bool, RepairError> {
        // A leading backslash marks a stringified string: the document was
        // embedded inside another string and had its escapes stripped. One
        // level of escaping is removed for the rest of this string.
        let skip_escape_chars = self.peek() == Some('\\');
        if skip_escape_chars {
            self.log("removed escape in stringified string");
            self.i += 1;
        }

        let Some(open) = self.peek() else {
            return Ok(false);
        };
        if !classify::is_quote(open) {
            return Ok(false);
        }
        if open != '"' {
            self.log("normalized quote");
        }

        // The closing quote must come from the opener's family: ASCII quotes
        // only match themselves, fancy quotes match their whole family.
        let is_end_quote: fn(char) -> bool = if open == '"' {
            |c| c == '"'
        } else if open == '\'' {
            |c| c == '\''
        } else if classify::is_single_quote_like(open) {
            classify::is_single_quote_like
        } else {
            classify::is_double_quote_like
        };

        let i_before = self.i;
        let o_before = self.out.len();
        let mut str_buf = String::from("\"");
        self.i += open.len_utf8();

        loop {
            let Some(c) = self.peek() else {
                // End of text with the string still open. When the last
                // non-whitespace character is a delimiter the quote went
                // missing somewhere earlier, so retry and stop there.
                let prev = self.prev_non_whitespace_char(self.i);
                if !stop_at_delimiter && prev.is_some_and(classify::is_delimiter) {
                    self.i = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true);
                }
                self.log("added missing end quote");
                patch::insert_before_last_whitespace(&mut str_buf, "\"");
                self.out.push_str(&str_buf);
                return Ok(true);
            };

            if is_end_quote(c) {
                // Candidate end quote: commit it, then judge whether the
                // string could really end here.
                let i_quote = self.i;
                let o_quote = str_buf.len();
                str_buf.push('"');
                self.i += c.len_utf8();
                self.out.push_str(&str_buf);

                self.parse_whitespace_and_skip_comments();
                let next = self.peek();
                if stop_at_delimiter
                    || next.is_none()
                    || next.is_some_and(|n| {
                        classify::is_delimiter(n) || classify::is_quote(n) || n.is_ascii_digit()
                    })
                {
                    self.parse_concatenated_string()?;
                    return Ok(true);
                }
                if self
                    .prev_non_whitespace_char(i_quote)
                    .is_some_and(classify::is_delimiter)
                {
                    // Not the real end: the quote we opened on was itself a
                    // stray. Start over, stopping at the next delimiter.
                    self.i = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true);
                }
                // An unescaped quote in the middle of the string: escape it
                // inside the pending buffer and keep going.
                self.log("escaped unescaped quote");
                self.out.truncate(o_before);
                self.i = i_quote + c.len_utf8();
                str_buf.truncate(o_quote);
                str_buf.push_str("\\\"");
            } else if stop_at_delimiter && classify::is_delimiter(c) {
                // Retry mode: this delimiter is where the missing closing
                // quote belongs.
                self.log("added missing end quote");
                patch::insert_before_last_whitespace(&mut str_buf, "\"");
                self.out.push_str(&str_buf);
                self.parse_concatenated_string()?;
                return Ok(true);
            } else if c == '\\' {
                match self.char_at(self.i + 1) {
                    Some(esc @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                        str_buf.push('\\');
                        str_buf.push(esc);
                        self.i += 2;
                    }
                    Some('u') => {
                        let mut j = 2usize;
                        while j < 6
                            && self.char_at(self.i + j).is_some_and(|h| h.is_ascii_hexdigit())
                        {
                            j += 1;
                        }
                        if j == 6 {
                            str_buf.push_str(&self.text[self.i..self.i + 6]);
                            self.i += 6;
                        } else if self.i + j >= self.text.len() {
                            // Truncated escape at the end of the input.
                            self.log("removed truncated unicode escape");
                            self.i = self.text.len();
                        } else {
                            return Err(RepairError::new(
                                RepairErrorKind::InvalidUnicodeCharacter,
                                self.i,
                            ));
                        }
                    }
                    Some(other) => {
                        // Not a JSON escape: keep the character, drop the
                        // backslash.
                        self.log("removed invalid escape character");
                        str_buf.push(other);
                        self.i += 1 + other.len_utf8();
                    }
                    None => {
                        // Dangling backslash at the end of the input.
                        self.i = self.text.len();
                    }
                }
            } else if c == '"' && self.text[..self.i].chars().next_back() != Some('\\') {
                // A bare double quote inside a string opened by another
                // quote family.
                self.log("escaped unescaped quote");
                str_buf.push_str("\\\"");
                self.i += 1;
            } else if classify::is_control_character(c) {
                match classify::control_escape(c) {
                    Some(esc) => {
                        self.log("escaped control character");
                        str_buf.push_str(esc);
                        self.i += c.len_utf8();
                    }
                    None => {
                        return Err(RepairError::new(
                            RepairErrorKind::InvalidCharacter(c),
                            self.i,
                        ));
                    }
                }
            } else {
                str_buf.push(c);
                self.i += c.len_utf8();
            }

            if skip_escape_chars {
                // Complete the un-doubling of the outer escape layer.
                self.skip_character('\\');
            }
        }
    }

    /// Merge `"a" + "b"` into `"ab"`. The closing quote of the left string is
    /// stripped, the right string is parsed, and its opening quote removed at
    /// the remembered offset. A `+` with no string after it re-closes the
    /// left string.
    pub(super) fn parse_concatenated_string(&mut self) -> Result<bool, RepairError> {
        let mut processed = false;
        self.parse_whitespace_and_skip_comments();
        while self.peek() == Some('+') {
            processed = true;
            self.log("merged concatenated string");
            self.i += 1;
            self.parse_whitespace_and_skip_comments();
            patch::strip_last_occurrence(&mut self.out, '"', true);
            let start = self.out.len();
            if self.parse_string(false)? {
                patch::remove_at_index(&mut self.out, start);
            } else {
                patch::insert_before_last_whitespace(&mut self.out, "\"");
            }
        }
        Ok(processed)
    }
}
