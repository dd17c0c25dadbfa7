//! Relay and input bit types
//!
//! Bit *i* of either byte maps to channel *i + 1* on the board silkscreen
//! (bit 0 = R1 / IN1, bit 7 = R8 / IN8).

use core::fmt;

/// Number of relay outputs and of digital inputs on the board
pub const CHANNELS: u8 = 8;

/// Checked bit position 0..=7
///
/// The sequencer's ramp cursor is one of these, so a value outside the
/// register width can never reach a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayIndex(u8);

impl RelayIndex {
    /// Bit 0 (relay 1)
    pub const FIRST: Self = Self(0);
    /// Bit 7 (relay 8)
    pub const LAST: Self = Self(CHANNELS - 1);

    /// Construct an index, rejecting anything past bit 7
    pub const fn new(bit: u8) -> Option<Self> {
        if bit < CHANNELS {
            Some(Self(bit))
        } else {
            None
        }
    }

    /// Bit position (0..=7)
    pub const fn bit(self) -> u8 {
        self.0
    }

    /// One-based relay/input number as printed on the board
    pub const fn channel(self) -> u8 {
        self.0 + 1
    }

    /// Next higher index, or `None` past bit 7
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Next lower index, or `None` below bit 0
    pub const fn prev(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(bit) => Some(Self(bit)),
            None => None,
        }
    }

    /// Iterate all indices from bit 0 to bit 7
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..CHANNELS).map(Self)
    }

    const fn mask(self) -> u8 {
        1 << self.0
    }
}

impl fmt::Display for RelayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commanded relay states (1 = energized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayMask(u8);

impl RelayMask {
    /// Every relay released
    pub const ALL_OFF: Self = Self(0x00);
    /// Every relay energized
    pub const ALL_ON: Self = Self(0xFF);

    /// Wrap a raw byte
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw byte, bit 0 = relay 1
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Copy of this mask with `relay` energized
    #[must_use]
    pub const fn with(self, relay: RelayIndex) -> Self {
        Self(self.0 | relay.mask())
    }

    /// Copy of this mask with `relay` released
    #[must_use]
    pub const fn without(self, relay: RelayIndex) -> Self {
        Self(self.0 & !relay.mask())
    }

    /// Check if `relay` is energized
    pub const fn is_on(self, relay: RelayIndex) -> bool {
        self.0 & relay.mask() != 0
    }

    /// Count of energized relays
    pub const fn count_on(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<u8> for RelayMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<RelayMask> for u8 {
    fn from(mask: RelayMask) -> Self {
        mask.0
    }
}

impl fmt::Display for RelayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// One atomic capture of the eight input lines, as sensed
///
/// Inputs are active-low: a raw 0 means the line is asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot(u8);

impl InputSnapshot {
    /// Wrap the raw byte shifted out of the register
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Raw levels, bit 0 = IN1
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Logical view: 1 = asserted
    pub const fn logical(self) -> u8 {
        !self.0
    }

    /// Check if `input` is asserted (raw level low)
    pub const fn is_active(self, input: RelayIndex) -> bool {
        self.logical() & input.mask() != 0
    }
}

impl From<u8> for InputSnapshot {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert_eq!(RelayIndex::new(7), Some(RelayIndex::LAST));
        assert_eq!(RelayIndex::new(8), None);
        assert_eq!(RelayIndex::LAST.next(), None);
        assert_eq!(RelayIndex::FIRST.prev(), None);
        assert_eq!(RelayIndex::FIRST.next().map(RelayIndex::bit), Some(1));
        assert_eq!(RelayIndex::LAST.channel(), 8);
    }

    #[test]
    fn test_index_iteration_covers_register() {
        let bits: heapless::Vec<u8, 8> = RelayIndex::all().map(RelayIndex::bit).collect();
        assert_eq!(bits.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_mask_set_and_clear() {
        let r3 = RelayIndex::new(2).unwrap();
        let mask = RelayMask::ALL_OFF.with(r3);
        assert_eq!(mask.bits(), 0x04);
        assert!(mask.is_on(r3));
        assert_eq!(mask.without(r3), RelayMask::ALL_OFF);
        assert_eq!(RelayMask::ALL_ON.count_on(), 8);
    }

    #[test]
    fn test_mask_display() {
        let mut out: heapless::String<8> = heapless::String::new();
        core::fmt::write(&mut out, format_args!("{}", RelayMask::from_bits(0x3F))).unwrap();
        assert_eq!(out.as_str(), "0x3F");
    }

    #[test]
    fn test_snapshot_is_active_low() {
        // IN1 pulled low, everything else idle high
        let snapshot = InputSnapshot::from_raw(0b1111_1110);
        assert!(snapshot.is_active(RelayIndex::FIRST));
        assert!(!snapshot.is_active(RelayIndex::LAST));
        assert_eq!(snapshot.logical(), 0b0000_0001);
    }
}
