//! The single mutable record behind the calculator.
//!
//! Fields are private; the engine modules mutate them through the key
//! operations and hosts read them through the accessors below.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Operator;

/// Literal shown in place of a number after an arithmetic overflow.
pub const ERROR_MARKER: &str = "Error";

/// Canonical value of an empty operand.
pub const EMPTY_OPERAND: &str = "0";

/// Where the machine sits with respect to the pending operator.
///
/// Magic mode is an overlay on top of any phase and is reported separately
/// by [`CalculatorState::is_magic_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending; digits accumulate into the current operand.
    Idle,
    /// An operator was just pressed; the next digit starts a fresh operand.
    OperatorPending,
    /// An operator is pending and the second operand is being typed.
    Accumulating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_value: String,
    pub(crate) previous_value: Option<Decimal>,
    pub(crate) operator: Option<Operator>,
    pub(crate) waiting_for_second_operand: bool,
    pub(crate) is_magic_mode: bool,
    pub(crate) magic_target_value: String,
    pub(crate) magic_input_counter: usize,
    pub(crate) plus_count: u32,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: EMPTY_OPERAND.to_string(),
            previous_value: None,
            operator: None,
            waiting_for_second_operand: false,
            is_magic_mode: false,
            magic_target_value: String::new(),
            magic_input_counter: 0,
            plus_count: 0,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand being typed, unformatted.
    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// The accumulator carried across chained operations.
    pub fn previous_value(&self) -> Option<Decimal> {
        self.previous_value
    }

    pub fn operator(&self) -> Option<&Operator> {
        self.operator.as_ref()
    }

    pub fn waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    pub fn is_magic_mode(&self) -> bool {
        self.is_magic_mode
    }

    pub fn magic_target_value(&self) -> &str {
        &self.magic_target_value
    }

    pub fn magic_input_counter(&self) -> usize {
        self.magic_input_counter
    }

    pub fn plus_count(&self) -> u32 {
        self.plus_count
    }

    pub fn is_error(&self) -> bool {
        self.current_value == ERROR_MARKER
    }

    /// Returns `true` once every character of the magic target has been shown.
    pub fn reveal_complete(&self) -> bool {
        self.magic_input_counter >= self.magic_target_value.len()
    }

    pub fn phase(&self) -> Phase {
        match (&self.operator, self.waiting_for_second_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::Accumulating,
        }
    }

    /// Whether the next typed character replaces the operand instead of
    /// being appended to it.
    pub(crate) fn replaces_operand(&self) -> bool {
        self.waiting_for_second_operand
            || self.current_value == EMPTY_OPERAND
            || self.is_error()
    }
}
