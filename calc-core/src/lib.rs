pub mod calculations;
pub mod clock;
pub mod config;
pub mod engine;
pub mod models;

pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use config::{EngineConfig, EngineConfigError};
pub use engine::{CalculatorEngine, handle_key};
pub use models::*;
