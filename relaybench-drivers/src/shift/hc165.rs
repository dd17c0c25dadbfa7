//! 74HC165 input register driver
//!
//! Captures the eight parallel inputs with a load pulse, then clocks them
//! out over the serial data line.
//!
//! # Protocol
//!
//! ```text
//! LOAD   ‾‾\__/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//! CLOCK  ‾‾‾‾‾‾‾‾\__/‾‾\__/‾‾\__/ ... \__/‾‾
//! DATA   --------<D7 ><D6 ><D5 > ... <D0 >--
//!                 ^    ^    ^         ^
//!                 sampled while CLOCK is low
//! ```
//!
//! The register presents the next bit after each rising edge, so sampling
//! happens in the low half of every clock period.

use embedded_hal::delay::DelayNs;
use relaybench_core::config::{TimingConfig, MIN_CLOCK_HALF_PERIOD_US, MIN_LOAD_PULSE_US};
use relaybench_core::traits::InputSource;
use relaybench_core::InputSnapshot;
use relaybench_hal::{InputPin, OutputPin};

/// Timing applied by [`Hc165::sample`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hc165Timing {
    /// Low time of the load pulse (µs)
    pub load_pulse_us: u32,
    /// Each half of the shift clock (µs)
    pub clock_half_period_us: u32,
}

impl Default for Hc165Timing {
    fn default() -> Self {
        Self {
            load_pulse_us: MIN_LOAD_PULSE_US,
            clock_half_period_us: MIN_CLOCK_HALF_PERIOD_US,
        }
    }
}

impl From<&TimingConfig> for Hc165Timing {
    fn from(timing: &TimingConfig) -> Self {
        Self {
            load_pulse_us: timing.load_pulse_us,
            clock_half_period_us: timing.clock_half_period_us,
        }
    }
}

/// 74HC165 driver
///
/// `I` is the serial data line; `O` the clock and load lines.
pub struct Hc165<I, O, D> {
    data: I,
    clock: O,
    load: O,
    delay: D,
    timing: Hc165Timing,
}

impl<I: InputPin, O: OutputPin, D: DelayNs> Hc165<I, O, D> {
    /// Create a driver and park the load line at its idle (high) level
    pub fn new(data: I, clock: O, mut load: O, delay: D, timing: Hc165Timing) -> Self {
        load.set_high();
        Self {
            data,
            clock,
            load,
            delay,
            timing,
        }
    }

    /// Capture the inputs and shift them out
    ///
    /// Bit *i* of the result is the raw level of input *i + 1* at the moment
    /// of the load pulse. Load and shift always run together; the register
    /// is never shifted without a fresh load.
    pub fn sample(&mut self) -> u8 {
        self.load.set_low();
        self.delay.delay_us(self.timing.load_pulse_us);
        self.load.set_high();

        let mut value = 0u8;
        for i in (0..8).rev() {
            self.clock.set_low();
            self.delay.delay_us(self.timing.clock_half_period_us);
            if self.data.is_high() {
                value |= 1 << i;
            }
            self.clock.set_high();
            self.delay.delay_us(self.timing.clock_half_period_us);
        }
        value
    }

    /// Consume the driver and hand back its lines and delay
    pub fn release(self) -> (I, O, O, D) {
        (self.data, self.clock, self.load, self.delay)
    }
}

impl<I: InputPin, O: OutputPin, D: DelayNs> InputSource for Hc165<I, O, D> {
    fn capture(&mut self) -> InputSnapshot {
        InputSnapshot::from_raw(self.sample())
    }
}
