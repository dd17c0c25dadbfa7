//! GPIO allocation
//!
//! Tracks which ESP32 GPIOs the wiring claims so no line is bound twice.

use heapless::FnvIndexSet;

use super::ConfigError;

/// Number of GPIO numbers on the ESP32 (GPIO0..=GPIO39)
pub const GPIO_COUNT: u8 = 40;

/// GPIOs without output drivers
pub const INPUT_ONLY_PINS: core::ops::RangeInclusive<u8> = 34..=39;

/// GPIO carrying the AI34 analog sense input (ADC1 channel 6)
///
/// Claimed before any control line, so wiring a line onto it is a conflict.
pub const SENSE_GPIO: u8 = 34;

/// Direction a line is claimed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// MCU drives the line
    Output,
    /// MCU samples the line
    Input,
}

/// GPIO allocator to track pin usage
pub struct PinAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 64>,
}

impl Default for PinAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PinAllocator {
    /// Create an allocator with nothing claimed
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Claim `pin` for the line named `role`
    pub fn claim(&mut self, role: &'static str, pin: u8, dir: Direction) -> Result<(), ConfigError> {
        if pin >= GPIO_COUNT {
            return Err(ConfigError::PinOutOfRange { role, pin });
        }
        if dir == Direction::Output && INPUT_ONLY_PINS.contains(&pin) {
            return Err(ConfigError::InputOnlyPin { role, pin });
        }
        if self.allocated.contains(&pin) {
            return Err(ConfigError::PinConflict { role, pin });
        }
        // Capacity exceeds GPIO_COUNT, so insert cannot fail here
        let _ = self.allocated.insert(pin);
        Ok(())
    }
}
