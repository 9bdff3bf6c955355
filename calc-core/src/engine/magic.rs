//! Magic mode: after the trigger, digit keys spell out the difference
//! between the current time (as `MDDHHMM`) and the running total, so that
//! finishing the sum shows the time.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculations::operand_to_string;
use crate::{CalculatorState, Clock, EMPTY_OPERAND};

impl CalculatorState {
    /// Arms magic mode if the encoded time is still ahead of the accumulator.
    ///
    /// When the accumulator already reaches or passes the encoded time the
    /// call does nothing.
    pub fn prepare_magic(
        &mut self,
        clock: &impl Clock,
    ) {
        let reading = clock.now();
        let target = Decimal::from(reading.as_number());
        let total = self.previous_value.unwrap_or(Decimal::ZERO);

        let diff = match target.checked_sub(total) {
            Some(diff) if diff > Decimal::ZERO => diff,
            _ => {
                debug!(%target, %total, "accumulator not below target, magic mode stays off");
                return;
            }
        };

        self.magic_target_value = operand_to_string(diff);
        self.magic_input_counter = 0;
        self.is_magic_mode = true;
        info!(
            target_len = self.magic_target_value.len(),
            "magic mode armed"
        );
    }

    /// Shows the next character of the magic target. Does nothing once the
    /// whole target is on screen.
    pub(crate) fn reveal_next(&mut self) {
        let Some(ch) = self
            .magic_target_value
            .chars()
            .nth(self.magic_input_counter)
        else {
            return;
        };

        if self.replaces_operand() {
            self.current_value = if ch == '.' {
                format!("{EMPTY_OPERAND}.")
            } else {
                ch.to_string()
            };
            self.waiting_for_second_operand = false;
        } else {
            self.current_value.push(ch);
        }
        self.magic_input_counter += 1;
    }
}
