//! Relay sequencer state machine
//!
//! Owns the relay mask and the current step. The host loop calls
//! [`RelaySequencer::tick`] once per period; each call advances exactly one
//! step and writes the relays at most once.

use super::step::Step;
use crate::mask::RelayMask;
use crate::traits::RelayOutput;

/// Ticks from start until the sequencer reaches [`Step::Halted`]
pub const TICKS_TO_HALT: usize = 19;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Step that ran on this tick
    pub step: Step,
    /// Mask pushed to the relays, `None` once halted
    pub driven: Option<RelayMask>,
    /// Step the next tick will run
    pub next: Step,
}

impl TickReport {
    /// Check if this tick moved the sequencer into the halted step
    pub fn just_halted(&self) -> bool {
        !self.step.is_halted() && self.next.is_halted()
    }
}

/// Relay test sequencer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelaySequencer {
    step: Step,
    mask: RelayMask,
}

impl Default for RelaySequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelaySequencer {
    /// Create a sequencer at the start of the program with every relay off
    pub const fn new() -> Self {
        Self {
            step: Step::INITIAL,
            mask: RelayMask::ALL_OFF,
        }
    }

    /// Step the next tick will run
    pub fn step(&self) -> Step {
        self.step
    }

    /// Mask most recently committed by the sequencer
    pub fn mask(&self) -> RelayMask {
        self.mask
    }

    /// Check if the program has finished
    pub fn is_halted(&self) -> bool {
        self.step.is_halted()
    }

    /// Advance the program by one step
    ///
    /// The mask is pushed to `relays` only after it is fully computed; once
    /// halted this never touches `relays` again.
    pub fn tick<R: RelayOutput>(&mut self, relays: &mut R) -> TickReport {
        let step = self.step;
        let transition = step.plan(self.mask);

        if let Some(mask) = transition.drive {
            self.mask = mask;
            relays.drive(mask);
        }
        self.step = transition.next;

        TickReport {
            step,
            driven: transition.drive,
            next: transition.next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::RelayIndex;
    use heapless::Vec;
    use proptest::prelude::*;

    /// Relay bank that records every drive call
    #[derive(Default)]
    struct MockRelays {
        writes: Vec<u8, 64>,
        last: RelayMask,
    }

    impl RelayOutput for MockRelays {
        fn drive(&mut self, mask: RelayMask) {
            self.writes.push(mask.bits()).unwrap();
            self.last = mask;
        }

        fn last_mask(&self) -> RelayMask {
            self.last
        }
    }

    fn run(ticks: usize) -> (RelaySequencer, MockRelays) {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        for _ in 0..ticks {
            seq.tick(&mut relays);
        }
        (seq, relays)
    }

    #[test]
    fn test_starts_ramping_from_relay_one() {
        let seq = RelaySequencer::new();
        assert_eq!(seq.step(), Step::RampUp(RelayIndex::FIRST));
        assert_eq!(seq.mask(), RelayMask::ALL_OFF);
        assert!(!seq.is_halted());
    }

    #[test]
    fn test_checkpoints() {
        let (seq, _) = run(8);
        assert_eq!(seq.mask(), RelayMask::ALL_ON);
        assert_eq!(seq.step(), Step::RampDown(RelayIndex::LAST));

        let (seq, _) = run(16);
        assert_eq!(seq.mask(), RelayMask::ALL_OFF);
        assert_eq!(seq.step(), Step::AllOn);

        let (seq, _) = run(17);
        assert_eq!(seq.mask(), RelayMask::ALL_ON);
        assert_eq!(seq.step(), Step::AllOff);

        let (seq, _) = run(18);
        assert_eq!(seq.mask(), RelayMask::ALL_OFF);
        assert_eq!(seq.step(), Step::HaltPending);

        let (seq, _) = run(TICKS_TO_HALT);
        assert_eq!(seq.mask(), RelayMask::ALL_OFF);
        assert!(seq.is_halted());
    }

    #[test]
    fn test_driven_sequence() {
        let (_, relays) = run(TICKS_TO_HALT);
        assert_eq!(
            relays.writes.as_slice(),
            &[
                0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF, // ramp up
                0x7F, 0x3F, 0x1F, 0x0F, 0x07, 0x03, 0x01, 0x00, // ramp down
                0xFF, 0x00, // all on, all off
                0x00, // halt re-assertion
            ]
        );
        assert_eq!(relays.last_mask(), RelayMask::ALL_OFF);
    }

    #[test]
    fn test_halted_writes_nothing() {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        for _ in 0..TICKS_TO_HALT {
            seq.tick(&mut relays);
        }
        let writes_at_halt = relays.writes.len();

        for _ in 0..25 {
            let report = seq.tick(&mut relays);
            assert_eq!(report.driven, None);
            assert_eq!(report.step, Step::Halted);
            assert!(!report.just_halted());
        }

        assert_eq!(relays.writes.len() - writes_at_halt, 0);
        assert_eq!(seq.mask(), RelayMask::ALL_OFF);
        assert!(seq.is_halted());
    }

    #[test]
    fn test_just_halted_fires_once() {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        let halting: usize = (0..TICKS_TO_HALT + 3)
            .filter(|_| seq.tick(&mut relays).just_halted())
            .count();
        assert_eq!(halting, 1);
    }

    #[test]
    fn test_each_tick_drives_at_most_once() {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        for _ in 0..TICKS_TO_HALT + 5 {
            let before = relays.writes.len();
            let report = seq.tick(&mut relays);
            let written = relays.writes.len() - before;
            assert_eq!(written, usize::from(report.driven.is_some()));
            if let Some(mask) = report.driven {
                assert_eq!(relays.last_mask(), mask);
                assert_eq!(seq.mask(), mask);
            }
        }
    }

    #[test]
    fn test_steps_never_go_backwards() {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        let mut last = seq.step().number();
        for _ in 0..TICKS_TO_HALT + 2 {
            let report = seq.tick(&mut relays);
            let n = report.next.number();
            assert!(n == last || n == last + 1, "step {} -> {}", last, n);
            last = n;
        }
    }

    #[test]
    fn test_ramp_cursor_stays_in_register() {
        let mut seq = RelaySequencer::new();
        let mut relays = MockRelays::default();
        let mut up = Vec::<u8, 8>::new();
        let mut down = Vec::<u8, 8>::new();
        while !seq.is_halted() {
            let report = seq.tick(&mut relays);
            match report.step {
                Step::RampUp(relay) => up.push(relay.bit()).unwrap(),
                Step::RampDown(relay) => down.push(relay.bit()).unwrap(),
                _ => {}
            }
        }
        assert_eq!(up.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(down.as_slice(), &[7, 6, 5, 4, 3, 2, 1, 0]);
    }

    proptest! {
        #[test]
        fn prop_halted_is_absorbing(extra in 0usize..200) {
            let (mut seq, mut relays) = run(TICKS_TO_HALT);
            let writes = relays.writes.len();
            for _ in 0..extra {
                seq.tick(&mut relays);
            }
            prop_assert!(seq.is_halted());
            prop_assert_eq!(seq.mask(), RelayMask::ALL_OFF);
            prop_assert_eq!(relays.writes.len(), writes);
        }
    }
}
