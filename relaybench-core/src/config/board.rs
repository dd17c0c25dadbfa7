//! Board wiring and timing configuration
//!
//! Defaults describe the ES32D26 relay/input board:
//!
//! ```text
//! 74HC595 (relays)  DATA=GPIO12, CLOCK=GPIO22, LATCH=GPIO23, OE=GPIO13 (active-low)
//! 74HC165 (inputs)  DATA=GPIO15, CLOCK=GPIO2,  LOAD=GPIO0
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pins::{Direction, PinAllocator, SENSE_GPIO};
use super::ConfigError;

/// Minimum hold after latch high before reading anything back (µs)
pub const MIN_LATCH_HOLD_US: u32 = 5;
/// Minimum low time of the input register's load pulse (µs)
pub const MIN_LOAD_PULSE_US: u32 = 5;
/// Minimum half period of the input register's shift clock (µs)
pub const MIN_CLOCK_HALF_PERIOD_US: u32 = 2;

/// Logic level that enables the output register's drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OePolarity {
    /// Outputs enabled while OE is low (74HC595 as wired on this board)
    #[default]
    ActiveLow,
    /// Outputs enabled while OE is high (inverting buffer in the path)
    ActiveHigh,
}

impl OePolarity {
    /// Level the OE line must be driven to for outputs to be active
    pub const fn enabled_high(self) -> bool {
        matches!(self, OePolarity::ActiveHigh)
    }
}

/// Output shift register (relay) lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RelayWiring {
    /// Serial data in (DS)
    pub data: u8,
    /// Shift clock (SH_CP)
    pub clock: u8,
    /// Storage latch (ST_CP)
    pub latch: u8,
    /// Output enable (OE)
    pub output_enable: u8,
    /// Polarity of the OE line
    pub oe_polarity: OePolarity,
}

impl Default for RelayWiring {
    fn default() -> Self {
        Self {
            data: 12,
            clock: 22,
            latch: 23,
            output_enable: 13,
            oe_polarity: OePolarity::ActiveLow,
        }
    }
}

/// Input shift register lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputWiring {
    /// Serial data out (QH)
    pub data: u8,
    /// Shift clock (CLK)
    pub clock: u8,
    /// Parallel load (SH/LD, active-low)
    pub load: u8,
}

impl Default for InputWiring {
    fn default() -> Self {
        Self {
            data: 15,
            clock: 2,
            load: 0,
        }
    }
}

/// Protocol and host-loop timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Period between sequencer ticks (ms)
    pub tick_period_ms: u32,
    /// Settle time after pin setup, before the start banner (ms)
    pub boot_settle_ms: u32,
    /// Delay between the start banner and the first tick (ms)
    pub start_delay_ms: u32,
    /// Idle poll period once the sequencer has halted (ms)
    pub halt_poll_ms: u32,
    /// Hold after latch high (µs)
    pub latch_hold_us: u32,
    /// Low time of the input load pulse (µs)
    pub load_pulse_us: u32,
    /// Each half of the input shift clock (µs)
    pub clock_half_period_us: u32,
    /// Data setup before each output clock rising edge (ns)
    pub setup_ns: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 2000,
            boot_settle_ms: 500,
            start_delay_ms: 2000,
            halt_poll_ms: 1000,
            latch_hold_us: MIN_LATCH_HOLD_US,
            load_pulse_us: MIN_LOAD_PULSE_US,
            clock_half_period_us: MIN_CLOCK_HALF_PERIOD_US,
            setup_ns: 0,
        }
    }
}

impl TimingConfig {
    /// Check every value against the peripheral minimums
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTiming("tick_period_ms must be non-zero"));
        }
        if self.halt_poll_ms == 0 {
            return Err(ConfigError::InvalidTiming("halt_poll_ms must be non-zero"));
        }
        if self.latch_hold_us < MIN_LATCH_HOLD_US {
            return Err(ConfigError::InvalidTiming("latch_hold_us must be at least 5"));
        }
        if self.load_pulse_us < MIN_LOAD_PULSE_US {
            return Err(ConfigError::InvalidTiming("load_pulse_us must be at least 5"));
        }
        if self.clock_half_period_us < MIN_CLOCK_HALF_PERIOD_US {
            return Err(ConfigError::InvalidTiming(
                "clock_half_period_us must be at least 2",
            ));
        }
        Ok(())
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// 74HC595 relay register wiring
    pub relays: RelayWiring,
    /// 74HC165 input register wiring
    pub inputs: InputWiring,
    /// Protocol and loop timing
    pub timing: TimingConfig,
}

impl BoardConfig {
    /// Validate wiring and timing
    ///
    /// Every control line must be a distinct, existing GPIO other than the
    /// sense input, and every line the MCU drives must have an output driver.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut alloc = PinAllocator::new();
        alloc.claim("sense", SENSE_GPIO, Direction::Input)?;
        for (role, pin, dir) in self.lines() {
            alloc.claim(role, pin, dir)?;
        }
        self.timing.validate()
    }

    /// Every control line with its role name and direction
    pub fn lines(&self) -> [(&'static str, u8, Direction); 7] {
        let r = &self.relays;
        let i = &self.inputs;
        [
            ("relays.data", r.data, Direction::Output),
            ("relays.clock", r.clock, Direction::Output),
            ("relays.latch", r.latch, Direction::Output),
            ("relays.output_enable", r.output_enable, Direction::Output),
            ("inputs.data", i.data, Direction::Input),
            ("inputs.clock", i.clock, Direction::Output),
            ("inputs.load", i.load, Direction::Output),
        ]
    }
}
