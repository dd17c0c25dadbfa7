//! Configuration validation errors

use core::fmt;

/// Errors found while validating a [`BoardConfig`](super::BoardConfig)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number does not exist on the MCU
    PinOutOfRange { role: &'static str, pin: u8 },
    /// GPIO already claimed by another line
    PinConflict { role: &'static str, pin: u8 },
    /// Output line assigned to an input-only GPIO
    InputOnlyPin { role: &'static str, pin: u8 },
    /// Timing value outside what the peripherals tolerate
    InvalidTiming(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PinOutOfRange { role, pin } => {
                write!(f, "{role}: gpio{pin} does not exist")
            }
            ConfigError::PinConflict { role, pin } => {
                write!(f, "{role}: gpio{pin} is already assigned")
            }
            ConfigError::InputOnlyPin { role, pin } => {
                write!(f, "{role}: gpio{pin} is input-only and cannot drive a line")
            }
            ConfigError::InvalidTiming(what) => write!(f, "invalid timing: {what}"),
        }
    }
}
