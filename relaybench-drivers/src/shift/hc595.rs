//! 74HC595 relay register driver
//!
//! Shifts a relay mask into the register and latches it onto the outputs.
//!
//! # Protocol
//!
//! ```text
//! OE     ‾‾\_______________________________________  (active-low shown)
//! LATCH  ‾‾‾‾\_______________________________/‾‾‾‾‾
//! CLOCK  ‾‾‾‾‾‾\_/‾‾\_/‾‾\_/ ... \_/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
//! DATA   ------<b7 ><b6 ><b5 > ... <b0 >-----------
//! ```
//!
//! Each bit is presented while CLOCK is low and sampled on the rising edge.
//! The register copies its shift stage to the outputs on LATCH rising.

use core::fmt;

use embedded_hal::delay::DelayNs;
use relaybench_core::config::{OePolarity, TimingConfig, MIN_LATCH_HOLD_US};
use relaybench_core::traits::RelayOutput;
use relaybench_core::RelayMask;
use relaybench_hal::{IoPin, Level, OutputPin};

/// Timing applied by [`Hc595::drive`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hc595Timing {
    /// Data setup before each clock rising edge (ns)
    ///
    /// Zero is fine when GPIO toggling is slower than the register's
    /// setup requirement; faster MCUs need a few tens of ns.
    pub setup_ns: u32,
    /// Hold after latch high (µs)
    pub latch_hold_us: u32,
}

impl Default for Hc595Timing {
    fn default() -> Self {
        Self {
            setup_ns: 0,
            latch_hold_us: MIN_LATCH_HOLD_US,
        }
    }
}

impl From<&TimingConfig> for Hc595Timing {
    fn from(timing: &TimingConfig) -> Self {
        Self {
            setup_ns: timing.setup_ns,
            latch_hold_us: timing.latch_hold_us,
        }
    }
}

/// Control lines of the relay register
pub struct Hc595Pins<P> {
    /// Serial data in (DS)
    pub data: P,
    /// Shift clock (SH_CP)
    pub clock: P,
    /// Storage latch (ST_CP)
    pub latch: P,
    /// Output enable (OE)
    pub output_enable: P,
}

/// Instantaneous levels of the register's control lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlLevels {
    /// Output enable (OE)
    pub output_enable: Level,
    /// Storage latch (ST_CP)
    pub latch: Level,
    /// Serial data in (DS)
    pub data: Level,
    /// Shift clock (SH_CP)
    pub clock: Level,
}

impl fmt::Display for ControlLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OE={} LATCH={} DATA={} CLOCK={}",
            self.output_enable, self.latch, self.data, self.clock
        )
    }
}

/// 74HC595 driver
///
/// Owns its four control lines exclusively. Outputs are enabled on every
/// drive and never disabled by this driver.
pub struct Hc595<P, D> {
    pins: Hc595Pins<P>,
    delay: D,
    polarity: OePolarity,
    timing: Hc595Timing,
    /// Mask committed by the most recent drive
    last: RelayMask,
}

impl<P: OutputPin, D: DelayNs> Hc595<P, D> {
    /// Create a driver over the given lines
    ///
    /// Nothing is written until the first [`drive`](Self::drive); callers
    /// usually drive [`RelayMask::ALL_OFF`] right after construction.
    pub fn new(pins: Hc595Pins<P>, delay: D, polarity: OePolarity, timing: Hc595Timing) -> Self {
        Self {
            pins,
            delay,
            polarity,
            timing,
            last: RelayMask::ALL_OFF,
        }
    }

    /// Configured OE polarity
    pub fn polarity(&self) -> OePolarity {
        self.polarity
    }

    /// Mask committed by the most recent drive
    pub fn last_mask(&self) -> RelayMask {
        self.last
    }

    /// Shift `mask` into the register and latch it onto the relays
    ///
    /// Bit 0 ends up on relay 1, bit 7 on relay 8.
    pub fn drive(&mut self, mask: RelayMask) {
        self.enable_outputs();
        self.pins.latch.set_low();

        let bits = mask.bits();
        for i in (0..8).rev() {
            self.pins.clock.set_low();
            self.pins.data.set_level(Level::from_bit(bits >> i));
            if self.timing.setup_ns > 0 {
                self.delay.delay_ns(self.timing.setup_ns);
            }
            self.pins.clock.set_high();
        }

        self.pins.latch.set_high();
        self.delay.delay_us(self.timing.latch_hold_us);
        self.last = mask;
    }

    /// Consume the driver and hand back its lines and delay
    pub fn release(self) -> (Hc595Pins<P>, D) {
        (self.pins, self.delay)
    }

    fn enable_outputs(&mut self) {
        self.pins
            .output_enable
            .set_level(Level::from(self.polarity.enabled_high()));
    }
}

impl<P: IoPin, D: DelayNs> Hc595<P, D> {
    /// Read back the pad levels of all four control lines
    ///
    /// Diagnostic only; used to verify wiring against the silkscreen.
    pub fn control_levels(&self) -> ControlLevels {
        ControlLevels {
            output_enable: self.pins.output_enable.level(),
            latch: self.pins.latch.level(),
            data: self.pins.data.level(),
            clock: self.pins.clock.level(),
        }
    }
}

impl<P: OutputPin, D: DelayNs> RelayOutput for Hc595<P, D> {
    fn drive(&mut self, mask: RelayMask) {
        Hc595::drive(self, mask);
    }

    fn last_mask(&self) -> RelayMask {
        self.last
    }
}
