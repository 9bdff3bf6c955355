//! Operand parsing and evaluation.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::Operator;

/// Parses a typed operand into a [`Decimal`].
///
/// A trailing decimal point (`"5."`) is read as the integer part. Anything
/// that does not parse, including the error marker or an operand too long
/// for a `Decimal`, yields `None`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), Some(dec!(12.5)));
/// assert_eq!(parse_operand("5."), Some(dec!(5)));
/// assert_eq!(parse_operand("Error"), None);
/// ```
pub fn parse_operand(value: &str) -> Option<Decimal> {
    let trimmed = value.strip_suffix('.').unwrap_or(value);
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Renders a result back into operand form with trailing fractional zeros
/// removed, so `8.0` becomes `"8"`.
pub fn operand_to_string(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Evaluates `first <op> second`.
///
/// Only [`Operator::Add`] computes anything; every other operator returns
/// `second` unchanged. Returns `None` when the sum overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::Operator;
/// use calc_core::calculations::calculate;
///
/// assert_eq!(calculate(dec!(5), dec!(3), &Operator::Add), Some(dec!(8)));
/// assert_eq!(calculate(dec!(5), dec!(3), &Operator::Equals), Some(dec!(3)));
/// ```
pub fn calculate(
    first: Decimal,
    second: Decimal,
    op: &Operator,
) -> Option<Decimal> {
    match op {
        Operator::Add => first.checked_add(second),
        Operator::Equals | Operator::Unsupported(_) => Some(second),
    }
}
