//! Outcome of a tick.
use super::{Contribution, EpisodicAgent};

/// Represents the outcome of one tick of the host scheduler.
///
/// The [`Runner`](crate::Runner) emits a [`Step`] object at every tick,
/// after the action was applied and the contact events of the tick were
/// delivered to the agent.
pub struct Step<A: EpisodicAgent> {
    /// Action.
    pub act: A::Act,

    /// Sum of the contributions of the tick.
    pub reward: f32,

    /// Contributions drained from the agent in this tick.
    pub contributions: Vec<Contribution<A::RewardKind>>,

    /// Flag denoting if the agent terminated the episode.
    pub is_terminated: bool,

    /// Flag denoting if the host cut the episode off.
    pub is_truncated: bool,
}

impl<A: EpisodicAgent> Step<A> {
    /// Constructs a [`Step`] object.
    pub fn new(
        act: A::Act,
        contributions: Vec<Contribution<A::RewardKind>>,
        is_terminated: bool,
        is_truncated: bool,
    ) -> Self {
        Step {
            act,
            reward: super::sum(&contributions),
            contributions,
            is_terminated,
            is_truncated,
        }
    }

    #[inline]
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
