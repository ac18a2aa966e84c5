//! The back-patching repair parser: a recursive-descent recognizer that
//! emits output while reading and splices already-emitted text when it
//! discovers a mistake only after committing to it.

use crate::classify;
use crate::error::{RepairError, RepairErrorKind};
use crate::log::RepairLogEntry;
use crate::patch;

mod array;
mod lex;
mod number;
mod object;
mod strings;

pub(crate) fn repair(text: &str) -> Result<String, RepairError> {
    let (out, _) = Repairer::new(text, false).run()?;
    Ok(out)
}

pub(crate) fn repair_with_log(
    text: &str,
) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
    Repairer::new(text, true).run()
}

/// Parser state: the input text, a cursor `i` (byte offset of the next
/// unread character), and the output produced so far. The cursor only moves
/// backwards inside the string recognizer, to a checkpoint taken before the
/// string attempt.
pub(crate) struct Repairer<'a> {
    text: &'a str,
    i: usize,
    out: String,
    log: Option<Vec<RepairLogEntry>>,
}

impl<'a> Repairer<'a> {
    pub(crate) fn new(text: &'a str, logging: bool) -> Self {
        Self {
            text,
            i: 0,
            out: String::with_capacity(text.len() + 8),
            log: logging.then(Vec::new),
        }
    }

    pub(crate) fn run(mut self) -> Result<(String, Vec<RepairLogEntry>), RepairError> {
        let processed = self.parse_value()?;
        if !processed {
            return Err(RepairError::new(
                RepairErrorKind::UnexpectedEnd,
                self.text.len(),
            ));
        }

        let processed_comma = self.parse_character(',');
        if processed_comma {
            self.parse_whitespace_and_skip_comments();
        }

        if self.peek().is_some_and(classify::is_start_of_value)
            && patch::ends_with_comma_or_newline(&self.out)
        {
            // Not a single document: newline-delimited values follow.
            if !processed_comma {
                self.log("inserted missing comma");
                patch::insert_before_last_whitespace(&mut self.out, ",");
            }
            self.parse_newline_delimited_json()?;
        } else if processed_comma {
            self.log("removed trailing comma");
            patch::strip_last_occurrence(&mut self.out, ',', false);
        }

        // Tolerate a run of stray closers after the root value.
        while matches!(self.peek(), Some('}' | ']')) {
            self.log("skipped stray closing bracket");
            self.i += 1;
            self.parse_whitespace_and_skip_comments();
        }

        match self.peek() {
            None => {
                self.trim_outer_whitespace();
                Ok((self.out, self.log.unwrap_or_default()))
            }
            Some(c) => Err(RepairError::new(
                RepairErrorKind::UnexpectedCharacter(c),
                self.i,
            )),
        }
    }

    fn parse_value(&mut self) -> Result<bool, RepairError> {
        self.parse_whitespace_and_skip_comments();
        let processed = self.parse_object()?
            || self.parse_array()?
            || self.parse_string(false)?
            || self.parse_number()?
            || self.parse_keywords()
            || self.parse_unquoted_string()?;
        self.parse_whitespace_and_skip_comments();
        Ok(processed)
    }

    /// Wrap the remaining newline-delimited values into one array. The root
    /// value is already in the output; each further value is separated by a
    /// comma, spliced in when the input lacks one.
    fn parse_newline_delimited_json(&mut self) -> Result<(), RepairError> {
        let mut initial = true;
        let mut processed_value = true;
        while processed_value {
            if !initial {
                if !self.parse_character(',') {
                    patch::insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }
            processed_value = self.parse_value()?;
        }
        // The loop always ends one separator ahead.
        patch::strip_last_occurrence(&mut self.out, ',', false);

        self.log("wrapped newline-delimited values in an array");
        let mut wrapped = String::with_capacity(self.out.len() + 4);
        wrapped.push_str("[\n");
        wrapped.push_str(&self.out);
        wrapped.push_str("\n]");
        self.out = wrapped;
        Ok(())
    }

    fn parse_keywords(&mut self) -> bool {
        self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
            || self.parse_keyword("True", "true")
            || self.parse_keyword("False", "false")
            || self.parse_keyword("None", "null")
    }

    fn parse_keyword(&mut self, name: &str, value: &'static str) -> bool {
        if self.text[self.i..].starts_with(name) {
            if name != value {
                self.log("normalized python-style keyword");
            }
            self.out.push_str(value);
            self.i += name.len();
            true
        } else {
            false
        }
    }

    /// An unquoted run of characters: either a function-call wrapper whose
    /// inner value survives alone, or a bare string that gets quoted.
    fn parse_unquoted_string(&mut self) -> Result<bool, RepairError> {
        let start = self.i;

        if self.peek().is_some_and(classify::is_function_name_char_start) {
            while self.peek().is_some_and(classify::is_function_name_char) {
                self.i += 1;
            }
            let mut j = self.i;
            while self.char_at(j).is_some_and(classify::is_whitespace) {
                j += 1;
            }
            if self.char_at(j) == Some('(') && classify::is_function_name(&self.text[start..self.i])
            {
                // A MongoDB data type or JSONP callback: keep the argument,
                // drop the wrapper.
                self.log("stripped function call wrapper");
                self.i = j + 1;
                self.parse_value()?;
                if self.skip_character(')') {
                    self.skip_character(';');
                }
                return Ok(true);
            }
        }

        while let Some(c) = self.peek() {
            if classify::is_delimiter(c) {
                break;
            }
            // A slash only ends the run when it opens a comment.
            if c == '/' && matches!(self.char_at(self.i + 1), Some('/' | '*')) {
                break;
            }
            self.i += c.len_utf8();
        }

        if self.i == start {
            return Ok(false);
        }

        // Back up over trailing whitespace so it stays outside the string.
        while self.i > start {
            match self.text[..self.i].chars().next_back() {
                Some(c) if classify::is_whitespace(c) => self.i -= c.len_utf8(),
                _ => break,
            }
        }

        let symbol = &self.text[start..self.i];
        if symbol == "undefined" {
            self.log("replaced undefined with null");
            self.out.push_str("null");
        } else {
            self.log("quoted unquoted string");
            patch::push_json_string(&mut self.out, symbol);
        }
        // A double quote here is the stray closer of a missing open quote.
        if self.peek() == Some('"') {
            self.i += 1;
        }
        Ok(true)
    }

    // ---- cursor primitives ----

    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|s| s.chars().next())
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.char_at(self.i)
    }

    /// Emit `c` and advance past it when it is the next input character.
    fn parse_character(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.out.push(c);
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advance past `c` without emitting it.
    fn skip_character(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// The last non-whitespace character before byte offset `end`.
    fn prev_non_whitespace_char(&self, end: usize) -> Option<char> {
        self.text[..end]
            .chars()
            .rev()
            .find(|&c| !classify::is_whitespace(c))
    }

    fn log(&mut self, message: &'static str) {
        let position = self.i;
        if let Some(entries) = self.log.as_mut() {
            entries.push(RepairLogEntry { position, message });
        }
    }

    fn trim_outer_whitespace(&mut self) {
        let end = self.out.trim_end_matches([' ', '\t', '\n', '\r']).len();
        self.out.truncate(end);
        let lead = self.out.len() - self.out.trim_start_matches([' ', '\t', '\n', '\r']).len();
        if lead > 0 {
            self.out.drain(..lead);
        }
    }
}
