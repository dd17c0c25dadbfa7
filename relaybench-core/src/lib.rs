//! Board-agnostic core logic for the relay/input bring-up diagnostic
//!
//! This crate contains all logic that does not depend on a specific MCU:
//!
//! - Relay and input bit types
//! - Seam traits between the sequencer and the shift-register drivers
//! - Relay test sequencer (state machine)
//! - Input status reporting
//! - Board wiring and timing configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod mask;
pub mod sequencer;
pub mod status;
pub mod traits;

pub use mask::{InputSnapshot, RelayIndex, RelayMask, CHANNELS};
pub use sequencer::{RelaySequencer, Step, TickReport};
pub use status::{report, InputLine, StatusReport};
