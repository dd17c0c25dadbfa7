//! Input status reporting
//!
//! Turns a raw [`InputSnapshot`] into the logical view printed by the bench
//! firmware. Inputs are active-low, so an asserted line reads as `1` here.

use core::fmt;

use heapless::String;

use crate::mask::{InputSnapshot, RelayIndex, CHANNELS};

/// Length of the rendered bit pattern
pub const PATTERN_LEN: usize = CHANNELS as usize;

/// Logical state of one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLine {
    /// Bit position in the snapshot
    pub bit: RelayIndex,
    /// Line asserted (raw level low)
    pub active: bool,
}

impl InputLine {
    /// One-based input number (IN1..IN8)
    pub fn input(&self) -> u8 {
        self.bit.channel()
    }
}

impl fmt::Display for InputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IN{} (bit {}): {}",
            self.input(),
            self.bit,
            u8::from(self.active)
        )
    }
}

/// Display view of one input snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    snapshot: InputSnapshot,
    pattern: String<PATTERN_LEN>,
}

impl StatusReport {
    /// Snapshot this report was built from
    pub fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }

    /// Logical bits as `'0'`/`'1'`, IN1 first
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Logical byte (complement of the raw snapshot)
    pub fn logical(&self) -> u8 {
        self.snapshot.logical()
    }

    /// Per-line breakdown, IN1 first
    pub fn lines(&self) -> impl Iterator<Item = InputLine> + '_ {
        let snapshot = self.snapshot;
        RelayIndex::all().map(move |bit| InputLine {
            bit,
            active: snapshot.is_active(bit),
        })
    }

    /// Number of asserted inputs
    pub fn active_count(&self) -> u32 {
        self.logical().count_ones()
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inputs: {}", self.pattern)
    }
}

/// Build the display view for a raw snapshot
pub fn report(snapshot: InputSnapshot) -> StatusReport {
    let mut pattern = String::new();
    for bit in RelayIndex::all() {
        let c = if snapshot.is_active(bit) { '1' } else { '0' };
        // Capacity is exactly one char per channel
        let _ = pattern.push(c);
    }
    StatusReport { snapshot, pattern }
}
