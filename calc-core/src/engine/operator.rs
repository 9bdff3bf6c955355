use tracing::{debug, info, warn};

use crate::calculations::{calculate, operand_to_string, parse_operand};
use crate::{CalculatorState, Clock, EngineConfig, Operator};

impl CalculatorState {
    /// Commits an operator using deferred evaluation.
    ///
    /// The first operator stores the typed operand as the accumulator. Each
    /// later operator evaluates the pending one against the accumulator, so
    /// chains run strictly left to right. Pressing an operator again before
    /// any digit only swaps the pending operator.
    ///
    /// Consecutive adds count towards the magic trigger; equals finishes
    /// the chain, leaves magic mode and clears the add count.
    pub fn handle_operator(
        &mut self,
        next: Operator,
        clock: &impl Clock,
        config: &EngineConfig,
    ) {
        let input_value = parse_operand(&self.current_value);

        if self.operator.is_some() && self.waiting_for_second_operand {
            debug!(from = ?self.operator, to = %next, "replacing pending operator");
            let is_equals = next == Operator::Equals;
            self.operator = Some(next);
            if is_equals {
                self.leave_magic_mode();
            }
            return;
        }

        if self.previous_value.is_none() {
            if input_value.is_some() {
                self.previous_value = input_value;
            }
        } else if let (Some(previous), Some(op)) = (self.previous_value, self.operator.as_ref()) {
            match input_value {
                None => {
                    debug!(input = %self.current_value, "operand does not fit a decimal, keeping accumulator");
                }
                Some(input) => {
                    let Some(result) = calculate(previous, input, op) else {
                        warn!(%previous, %input, %op, "sum overflowed");
                        self.fail();
                        return;
                    };
                    self.current_value = operand_to_string(result);
                    self.previous_value = Some(result);
                }
            }
        }

        self.waiting_for_second_operand = true;
        let is_add = next == Operator::Add;
        let is_equals = next == Operator::Equals;
        self.operator = Some(next);

        if is_add {
            self.plus_count = self.plus_count.saturating_add(1);
            if self.plus_count == config.magic_trigger_count {
                self.prepare_magic(clock);
            }
        }

        if is_equals {
            self.finish_equals();
        }
    }

    fn finish_equals(&mut self) {
        self.operator = None;
        self.waiting_for_second_operand = false;
        self.leave_magic_mode();
    }

    /// Equals always drops magic mode and the add count, even when it only
    /// swaps a pending operator.
    fn leave_magic_mode(&mut self) {
        self.plus_count = 0;
        if self.is_magic_mode {
            info!("magic mode exited");
        }
        self.is_magic_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{CalculatorState, EngineConfig, FixedClock, Operator, Phase};

    fn clock() -> FixedClock {
        FixedClock::at(2, 16, 22, 44)
    }

    fn press(
        state: &mut CalculatorState,
        op: Operator,
    ) {
        state.handle_operator(op, &clock(), &EngineConfig::default());
    }

    fn type_number(
        state: &mut CalculatorState,
        digits: &str,
    ) {
        for ch in digits.chars() {
            state.input_digit(ch.to_digit(10).unwrap() as u8);
        }
    }

    // =========================================================================
    // accumulator tests
    // =========================================================================

    #[test]
    fn first_operator_stores_accumulator() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");

        press(&mut state, Operator::Add);

        assert_eq!(state.previous_value(), Some(dec!(5)));
        assert_eq!(state.operator(), Some(&Operator::Add));
        assert_eq!(state.phase(), Phase::OperatorPending);
        assert_eq!(state.current_value(), "5");
    }

    #[test]
    fn second_operator_evaluates_pending_sum() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "12");
        press(&mut state, Operator::Add);
        type_number(&mut state, "30");

        press(&mut state, Operator::Equals);

        assert_eq!(state.current_value(), "42");
        assert_eq!(state.previous_value(), Some(dec!(42)));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn chain_evaluates_left_to_right() {
        let config = EngineConfig {
            magic_trigger_count: u32::MAX,
            ..EngineConfig::default()
        };
        let mut state = CalculatorState::new();
        for number in ["1", "2", "3"] {
            type_number(&mut state, number);
            state.handle_operator(Operator::Add, &clock(), &config);
        }

        assert!(!state.is_magic_mode());
        assert_eq!(state.current_value(), "6");
        assert_eq!(state.previous_value(), Some(dec!(6)));
    }

    #[test]
    fn repeated_operator_swaps_without_evaluating() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);

        press(&mut state, Operator::Add);

        assert_eq!(state.previous_value(), Some(dec!(5)));
        assert_eq!(state.current_value(), "5");
        assert_eq!(state.plus_count(), 1);
    }

    #[test]
    fn unsupported_operator_passes_second_operand_through() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Unsupported("multiply".to_string()));
        type_number(&mut state, "3");

        press(&mut state, Operator::Equals);

        assert_eq!(state.current_value(), "3");
    }

    #[test]
    fn equals_after_operator_only_swaps_it() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);

        press(&mut state, Operator::Equals);

        assert_eq!(state.operator(), Some(&Operator::Equals));
        assert!(state.waiting_for_second_operand());
        assert_eq!(state.plus_count(), 0);
        assert_eq!(state.previous_value(), Some(dec!(5)));
    }

    #[test]
    fn digit_after_swapped_equals_starts_fresh_operand() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);
        press(&mut state, Operator::Equals);

        type_number(&mut state, "3");

        assert_eq!(state.current_value(), "3");
        assert_eq!(state.phase(), Phase::Accumulating);
    }

    #[test]
    fn oversized_operand_keeps_accumulator() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "1");
        press(&mut state, Operator::Add);
        let oversized = "9".repeat(30);
        type_number(&mut state, &oversized);

        press(&mut state, Operator::Equals);

        assert!(!state.is_error());
        assert_eq!(state.previous_value(), Some(dec!(1)));
        assert_eq!(state.current_value(), oversized);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn overflow_shows_error_marker() {
        let mut state = CalculatorState::new();
        state.previous_value = Some(Decimal::MAX);
        state.operator = Some(Operator::Add);
        type_number(&mut state, "1");

        press(&mut state, Operator::Equals);

        assert!(state.is_error());
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operator(), None);
    }

    #[test]
    fn error_marker_is_not_stored_as_accumulator() {
        let mut state = CalculatorState::new();
        state.fail();

        press(&mut state, Operator::Add);

        assert_eq!(state.previous_value(), None);
        assert_eq!(state.phase(), Phase::OperatorPending);
    }

    // =========================================================================
    // magic trigger tests
    // =========================================================================

    #[test]
    fn second_add_arms_magic_mode() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);
        type_number(&mut state, "3");

        press(&mut state, Operator::Add);

        assert!(state.is_magic_mode());
        assert_eq!(state.plus_count(), 2);
        assert_eq!(state.magic_target_value(), "2162236");
    }

    #[test]
    fn third_add_does_not_rearm() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);
        type_number(&mut state, "3");
        press(&mut state, Operator::Add);
        type_number(&mut state, "00");

        press(&mut state, Operator::Add);

        assert_eq!(state.plus_count(), 3);
        // "21" was revealed and added to 8, the target stays as first built
        assert_eq!(state.magic_target_value(), "2162236");
        assert_eq!(state.magic_input_counter(), 2);
    }

    #[test]
    fn trigger_count_comes_from_config() {
        let config = EngineConfig {
            magic_trigger_count: 1,
            ..EngineConfig::default()
        };
        let mut state = CalculatorState::new();
        type_number(&mut state, "4");

        state.handle_operator(Operator::Add, &clock(), &config);

        assert!(state.is_magic_mode());
        assert_eq!(state.magic_target_value(), "2162240");
    }

    #[test]
    fn equals_exits_magic_mode_mid_reveal() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);
        type_number(&mut state, "3");
        press(&mut state, Operator::Add);
        type_number(&mut state, "000");

        press(&mut state, Operator::Equals);

        assert!(!state.is_magic_mode());
        assert_eq!(state.plus_count(), 0);
        assert_eq!(state.current_value(), "224");
    }

    #[test]
    fn equals_right_after_trigger_exits_magic_mode() {
        let mut state = CalculatorState::new();
        type_number(&mut state, "5");
        press(&mut state, Operator::Add);
        type_number(&mut state, "3");
        press(&mut state, Operator::Add);

        press(&mut state, Operator::Equals);

        assert!(!state.is_magic_mode());
        assert_eq!(state.plus_count(), 0);
        assert_eq!(state.operator(), Some(&Operator::Equals));

        type_number(&mut state, "1");
        assert_eq!(state.current_value(), "1");
    }
}
