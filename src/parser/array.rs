use super::Repairer;
use crate::error::RepairError;
use crate::patch;

impl Repairer<'_> {
    pub(super) fn parse_array(&mut self) -> Result<bool, RepairError> {
        if self.peek() != Some('[') {
            return Ok(false);
        }
        self.out.push('[');
        self.i += 1;
        self.parse_whitespace_and_skip_comments();

        // Drop a leading comma like [,1,2].
        if self.skip_character(',') {
            self.log("removed leading comma");
            self.parse_whitespace_and_skip_comments();
        }

        let mut initial = true;
        while self.i < self.text.len() && self.peek() != Some(']') {
            if !initial {
                if !self.parse_character(',') {
                    self.log("inserted missing comma");
                    patch::insert_before_last_whitespace(&mut self.out, ",");
                }
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_value = self.parse_value()?;
            if !processed_value {
                // No element follows the last comma: it was a trailing comma.
                self.log("removed trailing comma");
                patch::strip_last_occurrence(&mut self.out, ',', false);
                break;
            }
        }

        if self.peek() == Some(']') {
            self.out.push(']');
            self.i += 1;
        } else {
            self.log("added missing closing bracket");
            patch::insert_before_last_whitespace(&mut self.out, "]");
        }
        Ok(true)
    }
}
