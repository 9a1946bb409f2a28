//! Boundary to the vehicle simulation.
use crate::VehicleCommand;
use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position and orientation of the kart in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// The simulated vehicle (chassis, wheels, rigid body) driven by the agent.
///
/// The agent owns no physics. It reads telemetry and the pose of the kart
/// through this trait, pushes the interpreted command once per tick and
/// stops the rigid body at episode start.
pub trait Vehicle {
    /// Speed of the kart normalized by its top speed.
    fn normalized_speed(&self) -> f32;

    /// Zeroes linear and angular velocity.
    fn reset_velocities(&mut self);

    /// Sets the control input for the next physics pass.
    fn apply(&mut self, command: VehicleCommand);

    /// Current pose of the kart.
    fn pose(&self) -> Pose;

    /// Teleports the kart.
    fn set_pose(&mut self, pose: Pose);
}
