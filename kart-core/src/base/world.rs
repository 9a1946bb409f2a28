//! Source of contact events.

/// A contact event raised by the physics pass of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum WorldEvent<Z> {
    /// The agent entered a trigger zone.
    ZoneEntered(Z),

    /// The agent hit a solid object.
    Collision,
}

/// The world around an agent.
///
/// The world owns collision and trigger geometry. The agent never queries it;
/// the host forwards the events returned by [`World::advance`] to the agent.
pub trait World<Z> {
    /// Runs the physics pass of one tick and returns the contact events it raised.
    fn advance(&mut self) -> Vec<WorldEvent<Z>>;

    /// Resets the world at the start of an episode. Does nothing in the default implementation.
    fn reset(&mut self) {}
}
