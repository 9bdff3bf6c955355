pub mod clock_arg;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
