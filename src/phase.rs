use crate::constants::PHASE_CYCLE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cyclic animation counter in whole degrees, always within `[0, 360)`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "u16", into = "u16")]
pub struct Phase(u16);

impl Phase {
    pub const ZERO: Phase = Phase(0);

    /// Builds a phase from any degree count, wrapping into the cycle.
    pub fn new(degrees: u32) -> Self {
        Phase((degrees % PHASE_CYCLE as u32) as u16)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// The phase one tick later.
    pub fn next(self) -> Self {
        Phase((self.0 + 1) % PHASE_CYCLE)
    }

    pub fn advance(&mut self) -> Self {
        *self = self.next();
        *self
    }

    /// Every phase of one cycle, stepping by `step` degrees (a zero step is treated as one).
    pub fn sweep(step: u16) -> impl Iterator<Item = Phase> {
        (0..PHASE_CYCLE).step_by(step.max(1) as usize).map(Phase)
    }
}

impl From<u16> for Phase {
    fn from(degrees: u16) -> Self {
        Phase::new(degrees as u32)
    }
}

impl From<Phase> for u16 {
    fn from(phase: Phase) -> Self {
        phase.0
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_into_cycle() {
        assert_eq!(Phase::new(0).degrees(), 0);
        assert_eq!(Phase::new(359).degrees(), 359);
        assert_eq!(Phase::new(360).degrees(), 0);
        assert_eq!(Phase::new(725).degrees(), 5);
    }

    #[test]
    fn advance_wraps_at_360() {
        let mut phase = Phase::new(358);
        assert_eq!(phase.advance().degrees(), 359);
        assert_eq!(phase.advance().degrees(), 0);
        assert_eq!(phase, Phase::ZERO);
    }

    #[test]
    fn deserializing_wraps_out_of_range_degrees() {
        let phase: Phase = serde_json::from_str("400").expect("parse phase");
        assert_eq!(phase.degrees(), 40);
        assert_eq!(serde_json::to_string(&phase).expect("serialize phase"), "40");
    }

    #[test]
    fn sweep_covers_cycle() {
        assert_eq!(Phase::sweep(1).count(), 360);
        assert_eq!(Phase::sweep(10).count(), 36);
        assert_eq!(Phase::sweep(0).count(), 360);
        assert_eq!(Phase::sweep(7).last(), Some(Phase::new(357)));
    }
}
