//! Score milestones
//!
//! Each threshold fires once per session, in ascending order.

/// (threshold, message) pairs, ascending
pub const MILESTONES: [(u32, &str); 5] = [
    (10, "First splash!"),
    (25, "Making waves!"),
    (50, "Half a bucket!"),
    (75, "Overflowing!"),
    (100, "Water master!"),
];

/// Which milestones already fired this session (bit i = MILESTONES[i])
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneTracker {
    fired: u8,
}

impl MilestoneTracker {
    pub fn reset(&mut self) {
        self.fired = 0;
    }

    pub fn has_fired(&self, threshold: u32) -> bool {
        MILESTONES
            .iter()
            .position(|&(t, _)| t == threshold)
            .is_some_and(|i| self.fired & (1 << i) != 0)
    }

    /// Mark and return every not-yet-fired milestone at or below `score`
    pub fn check(&mut self, score: u32) -> Vec<(u32, &'static str)> {
        let mut reached = Vec::new();
        for (i, &(threshold, message)) in MILESTONES.iter().enumerate() {
            let bit = 1 << i;
            if score >= threshold && self.fired & bit == 0 {
                self.fired |= bit;
                reached.push((threshold, message));
            }
        }
        reached
    }
}
