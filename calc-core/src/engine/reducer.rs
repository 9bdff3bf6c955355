use tracing::debug;

use crate::calculations::format_display;
use crate::{
    CalculatorState, Clock, DisplayState, EngineConfig, EngineConfigError, KeyToken, SystemClock,
};

impl CalculatorState {
    /// Routes one key press to the matching operation.
    ///
    /// Operators other than add and equals are accepted and ignored.
    pub fn apply_key(
        &mut self,
        key: &KeyToken,
        clock: &impl Clock,
        config: &EngineConfig,
    ) {
        match key {
            KeyToken::Digit(digit) => self.input_digit(*digit),
            KeyToken::Decimal => self.input_decimal(),
            KeyToken::Clear => self.reset(),
            KeyToken::Backspace => self.delete_last(),
            KeyToken::Operator(op) if op.is_supported() => {
                self.handle_operator(op.clone(), clock, config)
            }
            KeyToken::Operator(op) => {
                debug!(tag = %op, "operator not implemented");
            }
        }
        debug!(
            %key,
            value = %self.current_value,
            phase = ?self.phase(),
            magic = self.is_magic_mode,
            "key handled"
        );
    }

    /// Formats the current operand for the host.
    pub fn display(
        &self,
        config: &EngineConfig,
    ) -> DisplayState {
        format_display(&self.current_value, config)
    }
}

/// Applies one key to `state` and returns the new state with its display.
///
/// # Example
///
/// ```
/// use calc_core::{CalculatorState, EngineConfig, FixedClock, KeyToken, handle_key};
///
/// let clock = FixedClock::at(2, 16, 22, 44);
/// let config = EngineConfig::default();
///
/// let mut state = CalculatorState::new();
/// for key in [KeyToken::Digit(1), KeyToken::Digit(2), KeyToken::Digit(3), KeyToken::Digit(4)] {
///     state = handle_key(state, &key, &clock, &config).0;
/// }
/// let (_, display) = handle_key(state, &KeyToken::Decimal, &clock, &config);
///
/// assert_eq!(display.text, "1,234.");
/// ```
pub fn handle_key(
    mut state: CalculatorState,
    key: &KeyToken,
    clock: &impl Clock,
    config: &EngineConfig,
) -> (CalculatorState, DisplayState) {
    state.apply_key(key, clock, config);
    let display = state.display(config);
    (state, display)
}

/// Owns the single long-lived calculator session of a host.
#[derive(Debug, Clone)]
pub struct CalculatorEngine<C: Clock = SystemClock> {
    state: CalculatorState,
    clock: C,
    config: EngineConfig,
}

impl Default for CalculatorEngine<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> CalculatorEngine<C> {
    /// Creates an engine with the default configuration.
    pub fn new(clock: C) -> Self {
        Self {
            state: CalculatorState::new(),
            clock,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine after validating `config`.
    pub fn with_config(
        clock: C,
        config: EngineConfig,
    ) -> Result<Self, EngineConfigError> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::new(),
            clock,
            config,
        })
    }

    /// Handles one key and returns what should be shown.
    pub fn handle_key(
        &mut self,
        key: &KeyToken,
    ) -> DisplayState {
        self.state.apply_key(key, &self.clock, &self.config);
        self.display()
    }

    /// Handles a sequence of keys, returning the display after the last one.
    pub fn press_all<'a, I>(
        &mut self,
        keys: I,
    ) -> DisplayState
    where
        I: IntoIterator<Item = &'a KeyToken>,
    {
        for key in keys {
            self.state.apply_key(key, &self.clock, &self.config);
        }
        self.display()
    }

    pub fn display(&self) -> DisplayState {
        self.state.display(&self.config)
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the session with a previously saved state.
    pub fn restore(
        &mut self,
        state: CalculatorState,
    ) {
        self.state = state;
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }
}
