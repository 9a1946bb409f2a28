//! Append-only log of reward contributions.
use std::fmt::Debug;

/// A single reward contribution of kind `K`.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution<K> {
    /// Source of the contribution.
    pub kind: K,

    /// Signed magnitude added to the reward.
    pub magnitude: f32,
}

impl<K> Contribution<K> {
    /// Constructs a contribution.
    pub fn new(kind: K, magnitude: f32) -> Self {
        Self { kind, magnitude }
    }
}

/// Reward contributions written from several callback sites within a tick.
///
/// Contributions are only appended. The host takes the pending ones with
/// [`RewardLog::drain`] once per tick, so a contribution is never counted
/// twice. The running episode total survives draining and is cleared by
/// [`RewardLog::clear`].
#[derive(Clone, Debug)]
pub struct RewardLog<K> {
    pending: Vec<Contribution<K>>,
    episode_total: f32,
}

impl<K> Default for RewardLog<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            episode_total: 0.0,
        }
    }
}

impl<K: Clone + Debug> RewardLog<K> {
    /// Appends a contribution.
    pub fn push(&mut self, kind: K, magnitude: f32) {
        log::trace!("Reward {:?}: {:?}", kind, magnitude);
        self.episode_total += magnitude;
        self.pending.push(Contribution::new(kind, magnitude));
    }

    /// Takes the pending contributions.
    pub fn drain(&mut self) -> Vec<Contribution<K>> {
        std::mem::take(&mut self.pending)
    }

    /// Pending contributions, not drained yet.
    pub fn pending(&self) -> &[Contribution<K>] {
        &self.pending
    }

    /// Sum of every contribution pushed since the last [`RewardLog::clear`].
    pub fn episode_total(&self) -> f32 {
        self.episode_total
    }

    /// Discards pending contributions and the episode total.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.episode_total = 0.0;
    }
}

/// Sum of the magnitudes of the given contributions.
pub(crate) fn sum<K>(contributions: &[Contribution<K>]) -> f32 {
    contributions.iter().map(|c| c.magnitude).sum()
}
