use tracing::warn;

use crate::{CalculatorState, EMPTY_OPERAND, ERROR_MARKER};

impl CalculatorState {
    /// Types a digit.
    ///
    /// While magic mode is on the pressed digit is ignored and the next
    /// character of the magic target is shown instead.
    pub fn input_digit(
        &mut self,
        digit: u8,
    ) {
        if self.is_magic_mode {
            self.reveal_next();
            return;
        }

        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "ignoring out-of-range digit");
            return;
        };

        if self.replaces_operand() {
            self.current_value = ch.to_string();
            self.waiting_for_second_operand = false;
        } else {
            self.current_value.push(ch);
        }
    }

    /// Types a decimal point. At most one point is ever kept, and the key
    /// does nothing in magic mode.
    pub fn input_decimal(&mut self) {
        if self.is_magic_mode {
            return;
        }

        if self.waiting_for_second_operand || self.is_error() {
            self.current_value = format!("{EMPTY_OPERAND}.");
            self.waiting_for_second_operand = false;
            return;
        }

        if !self.current_value.contains('.') {
            self.current_value.push('.');
        }
    }

    /// Drops the last typed character, falling back to `"0"`.
    ///
    /// The magic reveal counter is not rewound.
    pub fn delete_last(&mut self) {
        if self.current_value == ERROR_MARKER || self.current_value.chars().count() <= 1 {
            self.current_value = EMPTY_OPERAND.to_string();
        } else {
            self.current_value.pop();
        }
    }

    /// Clears the operand, accumulator, pending operator and magic mode.
    ///
    /// The magic target and its counter are left behind; they are rebuilt
    /// the next time magic mode is armed.
    pub fn reset(&mut self) {
        self.current_value = EMPTY_OPERAND.to_string();
        self.previous_value = None;
        self.operator = None;
        self.waiting_for_second_operand = false;
        self.is_magic_mode = false;
        self.plus_count = 0;
    }

    /// Puts the machine into the error display after a failed evaluation.
    pub(crate) fn fail(&mut self) {
        self.reset();
        self.current_value = ERROR_MARKER.to_string();
    }
}
