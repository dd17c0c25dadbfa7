//! ESP-IDF pin adapters
//!
//! Wraps `PinDriver` so the shift-register drivers can use it through the
//! board HAL traits. Driver errors are logged and otherwise ignored; the
//! protocol layer treats GPIO writes as always succeeding.

use esp_idf_svc::hal::gpio::{InputMode, OutputMode, Pin, PinDriver};
use log::warn;
use relaybench_hal::{InputPin, OutputPin};

/// A configured GPIO line
pub struct Line<'d, T: Pin, MODE> {
    driver: PinDriver<'d, T, MODE>,
}

impl<'d, T: Pin, MODE> Line<'d, T, MODE> {
    /// Wrap a configured pin driver
    pub fn new(driver: PinDriver<'d, T, MODE>) -> Self {
        Self { driver }
    }

    /// GPIO number of this line
    pub fn gpio(&self) -> i32 {
        self.driver.pin()
    }
}

impl<T: Pin, MODE: OutputMode> OutputPin for Line<'_, T, MODE> {
    fn set_high(&mut self) {
        if let Err(e) = self.driver.set_high() {
            warn!("gpio{}: set_high failed: {}", self.gpio(), e);
        }
    }

    fn set_low(&mut self) {
        if let Err(e) = self.driver.set_low() {
            warn!("gpio{}: set_low failed: {}", self.gpio(), e);
        }
    }

    fn is_set_high(&self) -> bool {
        self.driver.is_set_high()
    }
}

impl<T: Pin, MODE: InputMode> InputPin for Line<'_, T, MODE> {
    fn is_high(&self) -> bool {
        self.driver.is_high()
    }
}
