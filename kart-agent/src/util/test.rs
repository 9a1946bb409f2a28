//! Stand-ins of the simulation services for tests and demos.
use crate::{
    AxisSource, CameraSpec, InitMode, KartAct, KartAgent, KartAgentConfig, Pose, SensorService,
    Vehicle, VehicleCommand,
};
use anyhow::Result;
use glam::{Quat, Vec3};
use kart_core::{Policy, World, WorldEvent};
use std::collections::HashMap;

pub type Zone = u32;
pub type Agent = KartAgent<MockVehicle, MockSensor, Zone>;

/// Duration of a physics pass of [`MockVehicle`] in seconds.
pub const DT: f32 = 0.02;

/// A kart moving along its heading at a speed changed by the commands.
///
/// Speed is already normalized. Accelerating adds `accel * DT`, braking
/// removes it; steering turns the kart by `turn_rate * steering * DT`.
#[derive(Debug, Clone)]
pub struct MockVehicle {
    pub pose: Pose,
    pub speed: f32,
    pub accel: f32,
    pub turn_rate: f32,
    pub commands: Vec<VehicleCommand>,
    pub n_velocity_resets: usize,
}

impl MockVehicle {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            speed: 0.0,
            accel: 0.0,
            turn_rate: 0.0,
            commands: Vec::new(),
            n_velocity_resets: 0,
        }
    }

    /// A kart moving at constant speed whatever the command.
    pub fn cruising(speed: f32) -> Self {
        Self {
            speed,
            ..Self::new(Pose::default())
        }
    }

    pub fn accel(mut self, accel: f32, turn_rate: f32) -> Self {
        self.accel = accel;
        self.turn_rate = turn_rate;
        self
    }
}

impl Vehicle for MockVehicle {
    fn normalized_speed(&self) -> f32 {
        self.speed
    }

    fn reset_velocities(&mut self) {
        self.speed = 0.0;
        self.n_velocity_resets += 1;
    }

    fn apply(&mut self, command: VehicleCommand) {
        self.commands.push(command);
        if command.accelerate {
            self.speed += self.accel * DT;
        } else if command.brake {
            self.speed = (self.speed - self.accel * DT).max(0.0);
        }

        let yaw = Quat::from_rotation_y(self.turn_rate * command.steering * DT);
        self.pose.rotation = (self.pose.rotation * yaw).normalize();
        self.pose.position += self.pose.rotation * Vec3::Z * self.speed * DT;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }
}

/// Records the cameras mounted on the kart.
#[derive(Debug, Default)]
pub struct MockSensor {
    pub attached: Option<(String, CameraSpec)>,
    pub n_attach: usize,
    pub n_detach: usize,
}

impl SensorService for MockSensor {
    fn attach(&mut self, name: &str, spec: &CameraSpec) -> Result<()> {
        self.attached = Some((name.to_string(), spec.clone()));
        self.n_attach += 1;
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = None;
        self.n_detach += 1;
    }
}

/// Raises scripted events, one entry of the script per tick.
///
/// The script is replayed from the start at every episode.
#[derive(Debug, Clone, Default)]
pub struct ScriptedWorld {
    script: Vec<Vec<WorldEvent<Zone>>>,
    cursor: usize,
}

impl ScriptedWorld {
    pub fn new(script: Vec<Vec<WorldEvent<Zone>>>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl World<Zone> for ScriptedWorld {
    fn advance(&mut self) -> Vec<WorldEvent<Zone>> {
        let events = self.script.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        events
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// A policy sampling both axes uniformly in `[-1, 1]`.
pub struct RandomPolicy;

impl Policy<Agent> for RandomPolicy {
    fn sample(&mut self) -> KartAct {
        KartAct::new(fastrand::f32() * 2.0 - 1.0, fastrand::f32() * 2.0 - 1.0)
    }
}

/// Axes set by hand.
#[derive(Debug, Default)]
pub struct FixedAxes(pub HashMap<String, f32>);

impl FixedAxes {
    pub fn set(&mut self, name: &str, v: f32) {
        self.0.insert(name.to_string(), v);
    }
}

impl AxisSource for FixedAxes {
    fn axis(&self, name: &str) -> f32 {
        self.0.get(name).copied().unwrap_or(0.0)
    }
}

/// Pose the mock kart starts from.
pub fn spawn_pose() -> Pose {
    Pose::new(Vec3::new(10.0, 0.5, -3.0), Quat::from_rotation_y(0.25))
}

/// Builds an agent with four checkpoints `0..4` on a kart at [`spawn_pose()`].
pub fn agent(config: KartAgentConfig) -> Result<Agent> {
    KartAgent::build(
        config,
        InitMode::Training,
        Some(MockVehicle::new(spawn_pose())),
        MockSensor::default(),
        vec![0, 1, 2, 3],
    )
}
