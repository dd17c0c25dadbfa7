//! ES32D26 board bring-up
//!
//! Claims the GPIO lines named by the board configuration and builds the
//! two shift-register drivers on top of them.

use anyhow::{Context, Result};
use esp_idf_svc::hal::delay::Ets;
use esp_idf_svc::hal::gpio::{
    AnyIOPin, AnyInputPin, AnyOutputPin, Input, InputOutput, Output, PinDriver,
};
use log::info;
use relaybench_core::config::BoardConfig;
use relaybench_core::RelayMask;
use relaybench_drivers::{Hc165, Hc165Timing, Hc595, Hc595Pins, Hc595Timing};

use crate::pins::Line;
use crate::sense::SenseInput;

/// Relay register line, configured for read-back
pub type RelayLine = Line<'static, AnyIOPin, InputOutput>;
/// Input register control line (CLOCK, LOAD)
pub type OutLine = Line<'static, AnyOutputPin, Output>;
/// Input register serial data line
pub type InLine = Line<'static, AnyInputPin, Input>;

/// Relay register as wired on this board
pub type Relays = Hc595<RelayLine, Ets>;
/// Input register as wired on this board
pub type Inputs = Hc165<InLine, OutLine, Ets>;

/// Everything the bench loop talks to
pub struct Board {
    pub relays: Relays,
    pub inputs: Inputs,
    pub sense: SenseInput<'static>,
}

impl Board {
    /// Claim the configured lines and put the board in its idle state
    ///
    /// `config` must already be validated: the GPIO numbers are taken
    /// without going through `Peripherals`.
    pub fn new(config: &BoardConfig, sense: SenseInput<'static>) -> Result<Self> {
        let r = &config.relays;
        let pins = Hc595Pins {
            data: io_line(r.data)?,
            clock: io_line(r.clock)?,
            latch: io_line(r.latch)?,
            output_enable: io_line(r.output_enable)?,
        };
        let mut relays = Hc595::new(
            pins,
            Ets,
            r.oe_polarity,
            Hc595Timing::from(&config.timing),
        );
        relays.drive(RelayMask::ALL_OFF);
        info!("[RELAY] {} -> {}", relays.last_mask(), relays.control_levels());

        let i = &config.inputs;
        let inputs = Hc165::new(
            in_line(i.data)?,
            out_line(i.clock)?,
            out_line(i.load)?,
            Ets,
            Hc165Timing::from(&config.timing),
        );
        info!("Inputs initialized");

        Ok(Self {
            relays,
            inputs,
            sense,
        })
    }
}

// SAFETY (all three helpers): BoardConfig::validate guarantees each number
// is an existing GPIO, claimed once, with an output driver where one is
// needed. None of these GPIOs are taken from `Peripherals` elsewhere.

fn io_line(gpio: u8) -> Result<RelayLine> {
    let pin = unsafe { AnyIOPin::new(i32::from(gpio)) };
    let driver = PinDriver::input_output(pin).with_context(|| format!("GPIO{}", gpio))?;
    Ok(Line::new(driver))
}

fn out_line(gpio: u8) -> Result<OutLine> {
    let pin = unsafe { AnyOutputPin::new(i32::from(gpio)) };
    let driver = PinDriver::output(pin).with_context(|| format!("GPIO{}", gpio))?;
    Ok(Line::new(driver))
}

fn in_line(gpio: u8) -> Result<InLine> {
    let pin = unsafe { AnyInputPin::new(i32::from(gpio)) };
    let driver = PinDriver::input(pin).with_context(|| format!("GPIO{}", gpio))?;
    Ok(Line::new(driver))
}
