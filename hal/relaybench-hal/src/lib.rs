//! Relaybench Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the shift-register
//! drivers are written against. The ESP-IDF firmware implements them on top
//! of `PinDriver` and the oneshot ADC; host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  relaybench-firmware (host loop)        │
//! └─────────────────────────────────────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ relaybench-core │◄──│ relaybench-     │
//! │ (sequencer)     │   │ drivers (shift) │
//! └─────────────────┘   └─────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────┐
//! │  relaybench-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::IoPin`] - Digital I/O
//! - [`adc::AnalogInput`] - Auxiliary analog sense lines

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{InputPin, IoPin, Level, OutputPin};
