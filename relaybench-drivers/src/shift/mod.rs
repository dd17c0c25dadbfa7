//! Bit-banged shift register drivers
//!
//! Both registers are clocked most-significant bit first, so bit 7 of the
//! byte crosses the wire on the first clock pulse.

pub mod hc165;
pub mod hc595;

pub use hc165::{Hc165, Hc165Timing};
pub use hc595::{ControlLevels, Hc595, Hc595Pins, Hc595Timing};
