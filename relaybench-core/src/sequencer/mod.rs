//! Relay test sequencer
//!
//! A linear six-step program: ramp every relay on one at a time, ramp them
//! back off in reverse, pulse all on, all off, re-assert off, then halt.

pub mod machine;
pub mod step;

pub use machine::{RelaySequencer, TickReport};
pub use step::{Step, Transition};
