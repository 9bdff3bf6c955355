//! The key-driven state machine.
//!
//! Each submodule adds one family of operations to [`CalculatorState`]:
//! operand editing in `keypad`, deferred evaluation in `operator`, the
//! covert reveal in `magic`. `reducer` ties them together behind a single
//! key entry point and the host-facing [`CalculatorEngine`].

mod keypad;
mod magic;
mod operator;
mod reducer;

pub use reducer::{CalculatorEngine, handle_key};
