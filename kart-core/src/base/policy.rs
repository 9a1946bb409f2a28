//! Policy.
use super::EpisodicAgent;

/// A policy on an agent.
///
/// Policy is a mapping from an observation to an action. Observations reach
/// the policy through the sensor pipeline of the simulation, not through the
/// agent, so sampling takes no argument here.
pub trait Policy<A: EpisodicAgent> {
    /// Sample an action.
    fn sample(&mut self) -> A::Act;
}
