mod calculator_state;
mod display_state;
mod key_token;
mod operator;

pub use calculator_state::{CalculatorState, EMPTY_OPERAND, ERROR_MARKER, Phase};
pub use display_state::{DisplayState, SizeTier};
pub use key_token::{KeyParseError, KeyToken};
pub use operator::Operator;
