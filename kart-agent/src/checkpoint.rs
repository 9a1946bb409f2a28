//! Ordered progress through the checkpoints of a course.
use serde::{Deserialize, Serialize};

/// When a lap counts as completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LapRule {
    /// On reaching the last checkpoint of the sequence.
    #[default]
    LastCheckpoint,

    /// On wrapping from the last checkpoint back to the first one.
    Wrap,
}

/// Result of a checkpoint entered in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Index of the checkpoint just passed.
    pub index: usize,

    /// `true` if the advance completed a lap under the [`LapRule`] of the
    /// tracker.
    pub lap_completed: bool,
}

/// Tracks the last checkpoint passed in a cyclic sequence of zones.
///
/// Only the zone right after the current one counts. Entering any other zone,
/// including the current one again, changes nothing; overlapping trigger
/// volumes are harmless. The last zone is followed by the first one, so the
/// tracker cycles through looped courses forever.
///
/// A tracker with no zones never advances.
#[derive(Debug, Clone)]
pub struct CheckpointTracker<Z> {
    zones: Vec<Z>,
    rule: LapRule,
    index: usize,
    laps: usize,
}

impl<Z: PartialEq> CheckpointTracker<Z> {
    pub fn new(zones: Vec<Z>, rule: LapRule) -> Self {
        if zones.is_empty() {
            log::warn!("No checkpoint zones; checkpoint rewards are disabled");
        }
        Self {
            zones,
            rule,
            index: 0,
            laps: 0,
        }
    }

    pub fn rule(&self) -> LapRule {
        self.rule
    }

    /// Index of the last checkpoint passed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of completed laps since the last reset.
    pub fn laps(&self) -> usize {
        self.laps
    }

    /// Number of checkpoints in the sequence.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone expected next, if any.
    pub fn expected(&self) -> Option<&Z> {
        if self.zones.is_empty() {
            None
        } else {
            self.zones.get((self.index + 1) % self.zones.len())
        }
    }

    /// Handles the entry into `zone`.
    pub fn on_zone_entered(&mut self, zone: &Z) -> Option<Advance> {
        if self.expected() != Some(zone) {
            return None;
        }

        let n = self.zones.len();
        let next = (self.index + 1) % n;
        let lap_completed = match self.rule {
            LapRule::LastCheckpoint => next == n - 1,
            LapRule::Wrap => next == 0,
        };
        self.index = next;
        if lap_completed {
            self.laps += 1;
        }

        Some(Advance {
            index: next,
            lap_completed,
        })
    }

    /// Goes back to the first checkpoint.
    pub fn reset(&mut self) {
        self.index = 0;
        self.laps = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(rule: LapRule) -> CheckpointTracker<&'static str> {
        CheckpointTracker::new(vec!["cp0", "cp1", "cp2", "cp3"], rule)
    }

    #[test]
    fn test_sequential_progression() {
        let mut t = tracker(LapRule::Wrap);

        assert_eq!(t.on_zone_entered(&"cp2"), None);
        assert_eq!(t.index(), 0);

        let a = t.on_zone_entered(&"cp1").unwrap();
        assert_eq!(a.index, 1);
        assert_eq!(t.on_zone_entered(&"cp1"), None);

        let a = t.on_zone_entered(&"cp2").unwrap();
        assert_eq!(a.index, 2);
        assert!(!a.lap_completed);
        assert_eq!(t.index(), 2);
    }

    #[test]
    fn test_wraparound() {
        let mut t = tracker(LapRule::Wrap);
        for zone in ["cp1", "cp2", "cp3"] {
            assert!(t.on_zone_entered(&zone).is_some());
        }
        assert_eq!(t.index(), 3);

        let a = t.on_zone_entered(&"cp0").unwrap();
        assert_eq!(a.index, 0);
        assert!(a.lap_completed);
        assert_eq!(t.laps(), 1);

        // The second lap starts right away.
        assert!(t.on_zone_entered(&"cp1").is_some());
    }

    #[test]
    fn test_lap_on_last_checkpoint() {
        let mut t = tracker(LapRule::LastCheckpoint);
        assert!(!t.on_zone_entered(&"cp1").unwrap().lap_completed);
        assert!(!t.on_zone_entered(&"cp2").unwrap().lap_completed);

        let a = t.on_zone_entered(&"cp3").unwrap();
        assert_eq!(a.index, 3);
        assert!(a.lap_completed);
        assert_eq!(t.laps(), 1);

        // Wrapping to the first checkpoint is an ordinary advance.
        let a = t.on_zone_entered(&"cp0").unwrap();
        assert!(!a.lap_completed);
        assert_eq!(t.laps(), 1);
    }

    #[test]
    fn test_empty_is_inert() {
        let mut t = CheckpointTracker::<u32>::new(vec![], LapRule::default());
        assert_eq!(t.on_zone_entered(&0), None);
        assert_eq!(t.index(), 0);
        assert_eq!(t.expected(), None);
    }

    #[test]
    fn test_single_zone_completes_a_lap_on_every_entry() {
        for rule in [LapRule::LastCheckpoint, LapRule::Wrap] {
            let mut t = CheckpointTracker::new(vec![7u32], rule);
            assert_eq!(
                t.on_zone_entered(&7),
                Some(Advance {
                    index: 0,
                    lap_completed: true
                })
            );
            assert_eq!(t.on_zone_entered(&7).map(|a| a.lap_completed), Some(true));
            assert_eq!(t.laps(), 2);
        }
    }

    #[test]
    fn test_reset() {
        let mut t = tracker(LapRule::Wrap);
        t.on_zone_entered(&"cp1");
        t.reset();
        assert_eq!(t.index(), 0);
        assert_eq!(t.laps(), 0);
        assert_eq!(t.expected(), Some(&"cp1"));
    }
}
