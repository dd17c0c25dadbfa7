//! Digital input trait

use crate::mask::InputSnapshot;

/// Trait for a bank of eight digital inputs captured together
pub trait InputSource {
    /// Latch the parallel inputs and shift them out as one snapshot
    ///
    /// Takes `&mut self` because capturing clocks the register.
    fn capture(&mut self) -> InputSnapshot;
}
