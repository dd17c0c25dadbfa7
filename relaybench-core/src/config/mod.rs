//! Configuration types
//!
//! Board wiring and protocol timing, resolved once at startup and held
//! constant for the life of the program.

pub mod board;
pub mod error;
pub mod pins;

pub use board::*;
pub use error::ConfigError;
pub use pins::{Direction, PinAllocator, GPIO_COUNT, INPUT_ONLY_PINS, SENSE_GPIO};
