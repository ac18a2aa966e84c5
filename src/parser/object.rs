use super::Repairer;
use crate::classify;
use crate::error::{RepairError, RepairErrorKind};
use crate::patch;

impl Repairer<'_> {
    pub(super) fn parse_object(&mut self) -> Result<bool, RepairError> {
        if self.peek() != Some('{') {
            return Ok(false);
        }
        self.out.push('{');
        self.i += 1;
        self.parse_whitespace_and_skip_comments();

        // Drop a leading comma like {,"a":1}.
        if self.skip_character(',') {
            self.log("removed leading comma");
            self.parse_whitespace_and_skip_comments();
        }

        let mut initial = true;
        while self.i < self.text.len() && self.peek() != Some('}') {
            if !initial {
                if !self.parse_character(',') {
                    self.log("inserted missing comma");
                    patch::insert_before_last_whitespace(&mut self.out, ",");
                }
                self.parse_whitespace_and_skip_comments();
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_key = self.parse_string(false)? || self.parse_unquoted_string()?;
            if !processed_key {
                if matches!(self.peek(), Some('{' | '}' | '[' | ']') | None) {
                    // No key follows the last comma: it was a trailing comma.
                    self.log("removed trailing comma");
                    patch::strip_last_occurrence(&mut self.out, ',', false);
                } else {
                    return Err(RepairError::new(RepairErrorKind::ObjectKeyExpected, self.i));
                }
                break;
            }

            self.parse_whitespace_and_skip_comments();
            let processed_colon = self.parse_character(':');
            let truncated_text = self.i >= self.text.len();
            if !processed_colon {
                if self.peek().is_some_and(classify::is_start_of_value) || truncated_text {
                    self.log("inserted missing colon");
                    patch::insert_before_last_whitespace(&mut self.out, ":");
                } else {
                    return Err(RepairError::new(RepairErrorKind::ColonExpected, self.i));
                }
            }

            let processed_value = self.parse_value()?;
            if !processed_value {
                if processed_colon || truncated_text {
                    self.log("inserted missing value");
                    self.out.push_str("null");
                } else {
                    return Err(RepairError::new(RepairErrorKind::ColonExpected, self.i));
                }
            }
        }

        if self.peek() == Some('}') {
            self.out.push('}');
            self.i += 1;
        } else {
            self.log("added missing closing brace");
            patch::insert_before_last_whitespace(&mut self.out, "}");
        }
        Ok(true)
    }
}
