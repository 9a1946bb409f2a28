//! Agent driven by a host scheduler.
use super::{Act, Contribution};
use crate::record::Record;
use std::fmt::Debug;

/// Represents an agent whose lifecycle is driven by a host scheduler.
///
/// The host calls [`EpisodicAgent::on_episode_start`] before the first tick of
/// every episode, [`EpisodicAgent::step`] once per tick, and forwards contact
/// events from the [`World`](crate::World) through
/// [`EpisodicAgent::on_zone_entered`] and [`EpisodicAgent::on_collision`].
/// Callbacks never overlap.
///
/// Reward is not returned from the callbacks. Each callback may append
/// contributions to an internal log, which the host takes with
/// [`EpisodicAgent::drain_rewards`] once per tick.
pub trait EpisodicAgent {
    /// Action vector consumed at every tick.
    type Act: Act;

    /// Identifier of a zone delivered by the world.
    type Zone;

    /// Category of a reward contribution.
    type RewardKind: Clone + Debug;

    /// Applies an action for the current tick.
    ///
    /// The returned [`Record`] carries diagnostic values of the tick and is
    /// meant for logging only.
    fn step(&mut self, act: &Self::Act) -> Record;

    /// Resets the agent for a new episode.
    fn on_episode_start(&mut self);

    /// Handles entry into a zone.
    fn on_zone_entered(&mut self, zone: &Self::Zone);

    /// Handles a collision.
    fn on_collision(&mut self);

    /// Takes the contributions appended since the last call.
    fn drain_rewards(&mut self) -> Vec<Contribution<Self::RewardKind>>;

    /// Returns `true` if the agent requested the end of the current episode.
    fn is_terminated(&self) -> bool;
}
