//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencer/reporter and the
//! shift-register drivers.

pub mod input;
pub mod relay;

pub use input::InputSource;
pub use relay::RelayOutput;
