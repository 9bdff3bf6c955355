//! Turns the raw operand into the text the host renders.

use crate::{DisplayState, ERROR_MARKER, EngineConfig};

/// Inserts `,` between every group of three digits, counting from the right.
///
/// ```
/// use calc_core::calculations::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("999"), "999");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an operand for display and picks its size tier.
///
/// The integer part is grouped with thousands separators; the fractional
/// part, including a bare trailing point, is kept exactly as typed. The
/// error marker is passed through untouched.
///
/// # Examples
///
/// ```
/// use calc_core::{EngineConfig, SizeTier};
/// use calc_core::calculations::format_display;
///
/// let display = format_display("1234567.89", &EngineConfig::default());
///
/// assert_eq!(display.text, "1,234,567.89");
/// assert_eq!(display.tier, SizeTier::Small);
/// ```
pub fn format_display(
    current_value: &str,
    config: &EngineConfig,
) -> DisplayState {
    let text = if current_value == ERROR_MARKER {
        current_value.to_string()
    } else {
        match current_value.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}.{}", group_thousands(int_part), frac_part)
            }
            None => group_thousands(current_value),
        }
    };

    let tier = config.tier_for_length(text.chars().count());
    DisplayState { text, tier }
}
