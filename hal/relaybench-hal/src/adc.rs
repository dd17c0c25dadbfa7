//! Analog sense line abstraction
//!
//! The diagnostic takes one blocking raw sample per tick and prints it as-is.

use core::fmt;

/// Errors reported by an analog read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The converter rejected or timed out the conversion
    ConversionError,
    /// Channel not configured
    NotConfigured,
}

impl fmt::Display for AdcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdcError::ConversionError => f.write_str("conversion failed"),
            AdcError::NotConfigured => f.write_str("channel not configured"),
        }
    }
}

/// Single analog input channel
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait AnalogInput {
    /// Read one raw, unscaled conversion result
    fn read_raw(&mut self) -> Result<u16, AdcError>;
}
