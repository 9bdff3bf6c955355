//! Terminal rendering of the calculator display.

use calc_core::{CalculatorState, DisplayState};

/// Inner width of the display frame; longer values widen the frame.
const FRAME_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Appends the size tier and its font size after the frame.
    pub show_tier: bool,
}

/// Draws the display right-aligned inside a frame, the way the keypad page
/// aligns its readout.
///
/// ```
/// use calc_core::{DisplayState, SizeTier};
/// use calc_cli::render::{RenderOptions, render_display};
///
/// let display = DisplayState { text: "1,234".to_string(), tier: SizeTier::Large };
///
/// assert_eq!(render_display(&display, RenderOptions::default()), "[         1,234]");
/// ```
pub fn render_display(
    display: &DisplayState,
    options: RenderOptions,
) -> String {
    let framed = format!("[{:>FRAME_WIDTH$}]", display.text);
    if options.show_tier {
        format!(
            "{framed} ({}, {}px)",
            display.tier.as_str(),
            display.tier.font_px()
        )
    } else {
        framed
    }
}

/// Serializes the full calculator state as TOML.
pub fn dump_state(state: &CalculatorState) -> Result<String, toml::ser::Error> {
    toml::to_string(state)
}

#[cfg(test)]
mod tests {
    use calc_core::{CalculatorEngine, FixedClock, KeyToken, SizeTier};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_pads_to_frame_width() {
        let display = DisplayState {
            text: "0".to_string(),
            tier: SizeTier::Large,
        };

        assert_eq!(
            render_display(&display, RenderOptions::default()),
            "[             0]"
        );
    }

    #[test]
    fn render_grows_with_long_values() {
        let display = DisplayState {
            text: "1,234,567,890,123".to_string(),
            tier: SizeTier::Small,
        };

        assert_eq!(
            render_display(&display, RenderOptions::default()),
            "[1,234,567,890,123]"
        );
    }

    #[test]
    fn render_appends_tier_when_requested() {
        let display = DisplayState {
            text: "2,162,244".to_string(),
            tier: SizeTier::Medium,
        };

        assert_eq!(
            render_display(&display, RenderOptions { show_tier: true }),
            "[     2,162,244] (medium, 60px)"
        );
    }

    #[test]
    fn dump_state_lists_fields() {
        let mut engine = CalculatorEngine::new(FixedClock::at(2, 16, 22, 44));
        for key in [KeyToken::Digit(5), KeyToken::add(), KeyToken::Digit(3)] {
            engine.handle_key(&key);
        }

        let dumped = dump_state(engine.state()).unwrap();

        assert!(dumped.contains("current_value = \"3\""));
        assert!(dumped.contains("previous_value = \"5\""));
        assert!(dumped.contains("operator = \"Add\""));
        assert!(dumped.contains("plus_count = 1"));
    }
}
