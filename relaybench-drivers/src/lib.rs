//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in relaybench-core for the board's shift registers:
//!
//! - 74HC595 serial-in/parallel-out register driving the relays
//! - 74HC165 parallel-in/serial-out register reading the inputs
//!
//! Both are bit-banged over plain GPIO lines with an injected
//! [`embedded_hal::delay::DelayNs`] for the peripheral's timing minimums.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod shift;

pub use shift::{ControlLevels, Hc165, Hc165Timing, Hc595, Hc595Pins, Hc595Timing};
