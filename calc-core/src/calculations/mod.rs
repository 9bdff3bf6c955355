//! Arithmetic and formatting primitives used by the engine.
//!
//! Nothing here touches [`CalculatorState`](crate::CalculatorState); these
//! are plain functions over strings and decimals.

pub mod common;
pub mod display;

pub use common::{calculate, operand_to_string, parse_operand};
pub use display::{format_display, group_thousands};
