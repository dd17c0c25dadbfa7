//! Relay output trait

use crate::mask::RelayMask;

/// Trait for a bank of eight relays driven as one byte
///
/// Implementations commit the whole mask before returning; there is no
/// partially applied state visible on the relay outputs.
pub trait RelayOutput {
    /// Drive every relay to the state given by `mask`
    fn drive(&mut self, mask: RelayMask);

    /// Mask committed by the most recent `drive`
    fn last_mask(&self) -> RelayMask;
}

impl<T: RelayOutput + ?Sized> RelayOutput for &mut T {
    fn drive(&mut self, mask: RelayMask) {
        (**self).drive(mask);
    }

    fn last_mask(&self) -> RelayMask {
        (**self).last_mask()
    }
}
