use super::Repairer;
use crate::classify;
use crate::error::RepairError;
use crate::patch;

impl Repairer<'_> {
    pub(super) fn parse_number(&mut self) -> Result<bool, RepairError> {
        let start = self.i;

        if self.peek() == Some('-') {
            self.i += 1;
            if self.at_end_of_number() {
                self.repair_truncated_number(start);
                return Ok(true);
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.i = start;
                return Ok(false);
            }
        }

        let int_start = self.i;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.i += 1;
        }
        if self.i == int_start {
            // No integer digits at all; not a number.
            self.i = start;
            return Ok(false);
        }

        if self.peek() == Some('.') {
            self.i += 1;
            if self.at_end_of_number() {
                self.repair_truncated_number(start);
                return Ok(true);
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.i = start;
                return Ok(false);
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.i += 1;
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.i += 1;
            if matches!(self.peek(), Some('-' | '+')) {
                self.i += 1;
            }
            if self.at_end_of_number() {
                self.repair_truncated_number(start);
                return Ok(true);
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.i = start;
                return Ok(false);
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.i += 1;
            }
        }

        // An adjacent letter or similar means this was not a number after
        // all; roll back so the unquoted-string recognizer can take it.
        if !self.at_end_of_number() {
            self.i = start;
            return Ok(false);
        }

        let num = &self.text[start..self.i];
        let digits = num.strip_prefix('-').unwrap_or(num);
        if digits.len() > 1 && digits.as_bytes()[0] == b'0' && digits.as_bytes()[1].is_ascii_digit()
        {
            // 00789 is not valid JSON; keep the digits as a string.
            self.log("quoted number with leading zero");
            patch::push_json_string(&mut self.out, num);
        } else {
            self.out.push_str(num);
        }
        Ok(true)
    }

    fn at_end_of_number(&self) -> bool {
        match self.peek() {
            None => true,
            Some(c) => classify::is_delimiter(c) || classify::is_whitespace(c),
        }
    }

    /// A number cut off right after `-`, `.`, or an exponent marker is
    /// completed with a single `0`: `-` → `-0`, `1.` → `1.0`, `2e` → `2e0`.
    fn repair_truncated_number(&mut self, start: usize) {
        self.log("completed truncated number");
        self.out.push_str(&self.text[start..self.i]);
        self.out.push('0');
    }
}
