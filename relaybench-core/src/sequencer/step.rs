//! Sequencer steps and transition table
//!
//! Every step's effect is a pure function of the step and the current mask,
//! so the whole program can be checked without hardware.

use core::fmt;

use crate::mask::{RelayIndex, RelayMask};

/// Sequencer steps, in program order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Energize relays one at a time, bit 0 upward
    RampUp(RelayIndex),
    /// Release relays one at a time, bit 7 downward
    RampDown(RelayIndex),
    /// Energize every relay at once
    AllOn,
    /// Release every relay at once
    AllOff,
    /// Final all-off re-assertion before stopping
    HaltPending,
    /// Terminal; no further hardware writes
    Halted,
}

/// Outcome of one step of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Mask to push to the relays, if this step writes hardware
    pub drive: Option<RelayMask>,
    /// Step to run on the next tick
    pub next: Step,
}

impl Step {
    /// Step the sequencer starts in
    pub const INITIAL: Self = Step::RampUp(RelayIndex::FIRST);

    /// Transition table
    ///
    /// The ramp cursors move to the next step at the last valid bit rather
    /// than stepping past it, so no out-of-range index is ever produced.
    pub fn plan(self, mask: RelayMask) -> Transition {
        match self {
            Step::RampUp(relay) => Transition {
                drive: Some(mask.with(relay)),
                next: match relay.next() {
                    Some(next) => Step::RampUp(next),
                    None => Step::RampDown(RelayIndex::LAST),
                },
            },
            Step::RampDown(relay) => Transition {
                drive: Some(mask.without(relay)),
                next: match relay.prev() {
                    Some(prev) => Step::RampDown(prev),
                    None => Step::AllOn,
                },
            },
            Step::AllOn => Transition {
                drive: Some(RelayMask::ALL_ON),
                next: Step::AllOff,
            },
            Step::AllOff => Transition {
                drive: Some(RelayMask::ALL_OFF),
                next: Step::HaltPending,
            },
            Step::HaltPending => Transition {
                drive: Some(RelayMask::ALL_OFF),
                next: Step::Halted,
            },
            Step::Halted => Transition {
                drive: None,
                next: Step::Halted,
            },
        }
    }

    /// Stable upper-case name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Step::RampUp(_) => "RAMP_UP",
            Step::RampDown(_) => "RAMP_DOWN",
            Step::AllOn => "ALL_ON",
            Step::AllOff => "ALL_OFF",
            Step::HaltPending => "HALT_PENDING",
            Step::Halted => "HALTED",
        }
    }

    /// Position in the program (0..=5), as printed on bench logs
    pub const fn number(self) -> u8 {
        match self {
            Step::RampUp(_) => 0,
            Step::RampDown(_) => 1,
            Step::AllOn => 2,
            Step::AllOff => 3,
            Step::HaltPending => 4,
            Step::Halted => 5,
        }
    }

    /// Ramp cursor, only present in the two ramp steps
    pub const fn cursor(self) -> Option<RelayIndex> {
        match self {
            Step::RampUp(relay) | Step::RampDown(relay) => Some(relay),
            _ => None,
        }
    }

    /// Check if this is the terminal step
    pub const fn is_halted(self) -> bool {
        matches!(self, Step::Halted)
    }

    /// Human-readable description of what this step does
    pub fn describe(self) -> Description {
        Description(self)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cursor() {
            Some(relay) => write!(f, "{}[{}]", self.name(), relay),
            None => f.write_str(self.name()),
        }
    }
}

/// Log line for a step, see [`Step::describe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description(Step);

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.0;
        let text = match step {
            Step::RampUp(relay) => {
                return write!(
                    f,
                    "Step {}: Turning on relays one by one. Index: {}",
                    step.number(),
                    relay
                );
            }
            Step::RampDown(relay) => {
                return write!(
                    f,
                    "Step {}: Turning off relays one by one. Index: {}",
                    step.number(),
                    relay
                );
            }
            Step::AllOn => "Turning all relays ON",
            Step::AllOff => "Turning all relays OFF",
            Step::HaltPending => "Test complete. All relays OFF. Program will stop.",
            // Not a step of the program, no prefix
            Step::Halted => return f.write_str("Program halted. All relays OFF."),
        };
        write!(f, "Step {}: {}", step.number(), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(bit: u8) -> RelayIndex {
        RelayIndex::new(bit).unwrap()
    }

    #[test]
    fn test_ramp_up_sets_cursor_bit() {
        let t = Step::RampUp(idx(3)).plan(RelayMask::from_bits(0x07));
        assert_eq!(t.drive, Some(RelayMask::from_bits(0x0F)));
        assert_eq!(t.next, Step::RampUp(idx(4)));
    }

    #[test]
    fn test_ramp_up_exits_at_last_bit() {
        let t = Step::RampUp(RelayIndex::LAST).plan(RelayMask::from_bits(0x7F));
        assert_eq!(t.drive, Some(RelayMask::ALL_ON));
        assert_eq!(t.next, Step::RampDown(RelayIndex::LAST));
    }

    #[test]
    fn test_ramp_down_clears_cursor_bit() {
        let t = Step::RampDown(idx(5)).plan(RelayMask::from_bits(0x3F));
        assert_eq!(t.drive, Some(RelayMask::from_bits(0x1F)));
        assert_eq!(t.next, Step::RampDown(idx(4)));
    }

    #[test]
    fn test_ramp_down_exits_at_first_bit() {
        let t = Step::RampDown(RelayIndex::FIRST).plan(RelayMask::from_bits(0x01));
        assert_eq!(t.drive, Some(RelayMask::ALL_OFF));
        assert_eq!(t.next, Step::AllOn);
    }

    #[test]
    fn test_bulk_steps_ignore_current_mask() {
        let mask = RelayMask::from_bits(0x5A);
        assert_eq!(Step::AllOn.plan(mask).drive, Some(RelayMask::ALL_ON));
        assert_eq!(Step::AllOff.plan(mask).drive, Some(RelayMask::ALL_OFF));
        assert_eq!(Step::HaltPending.plan(mask).drive, Some(RelayMask::ALL_OFF));
    }

    #[test]
    fn test_halted_is_terminal_and_silent() {
        let t = Step::Halted.plan(RelayMask::ALL_ON);
        assert_eq!(t.drive, None);
        assert_eq!(t.next, Step::Halted);
    }

    #[test]
    fn test_step_numbers_strictly_increase() {
        let order = [
            Step::INITIAL,
            Step::RampDown(RelayIndex::LAST),
            Step::AllOn,
            Step::AllOff,
            Step::HaltPending,
            Step::Halted,
        ];
        for pair in order.windows(2) {
            assert_eq!(pair[0].number() + 1, pair[1].number());
        }
    }

    #[test]
    fn test_description_text() {
        let mut out: heapless::String<64> = heapless::String::new();
        core::fmt::write(&mut out, format_args!("{}", Step::RampUp(idx(2)).describe())).unwrap();
        assert_eq!(
            out.as_str(),
            "Step 0: Turning on relays one by one. Index: 2"
        );

        out.clear();
        core::fmt::write(&mut out, format_args!("{}", Step::AllOff.describe())).unwrap();
        assert_eq!(out.as_str(), "Step 3: Turning all relays OFF");

        out.clear();
        core::fmt::write(&mut out, format_args!("{}", Step::Halted.describe())).unwrap();
        assert_eq!(out.as_str(), "Program halted. All relays OFF.");

        out.clear();
        core::fmt::write(&mut out, format_args!("{}", Step::RampDown(idx(6)))).unwrap();
        assert_eq!(out.as_str(), "RAMP_DOWN[6]");
    }
}
