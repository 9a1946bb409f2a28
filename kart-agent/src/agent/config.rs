//! Configuration of [KartAgent](super::KartAgent).
use crate::{CameraSpec, ColorMode, LapRule, RewardConfig};
use anyhow::Result;
use glam::Vec3;
use kart_core::error::KartError;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`KartAgent`](super::KartAgent).
///
/// The configuration is moved into the agent when it is built and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KartAgentConfig {
    pub rewards: RewardConfig,
    pub camera: CameraSpec,

    /// When a lap counts as completed. Every completed lap adds
    /// [`RewardConfig::lap_reward`].
    #[serde(default)]
    pub lap_rule: LapRule,

    /// Ends the episode when the kart completes a lap.
    #[serde(default)]
    pub terminate_on_lap_complete: bool,
}

impl KartAgentConfig {
    /// Sets the reward of a checkpoint passed in order.
    pub fn checkpoint_reward(mut self, v: f32) -> Self {
        self.rewards.checkpoint_reward = v;
        self
    }

    /// Sets the penalty of a collision.
    pub fn hit_penalty(mut self, v: f32) -> Self {
        self.rewards.hit_penalty = v;
        self
    }

    /// Sets the penalty of every tick.
    pub fn time_penalty(mut self, v: f32) -> Self {
        self.rewards.time_penalty = v;
        self
    }

    /// Sets the reward per unit of normalized speed.
    pub fn speed_reward(mut self, v: f32) -> Self {
        self.rewards.speed_reward = v;
        self
    }

    /// Sets the bonus of a completed lap.
    pub fn lap_reward(mut self, v: f32) -> Self {
        self.rewards.lap_reward = v;
        self
    }

    pub fn lap_rule(mut self, v: LapRule) -> Self {
        self.lap_rule = v;
        self
    }

    /// Ends episodes on lap completion.
    pub fn terminate_on_lap_complete(mut self, v: bool) -> Self {
        self.terminate_on_lap_complete = v;
        self
    }

    /// Sets the camera offset and rotation (Euler angles in degrees).
    pub fn camera_pose(mut self, offset: Vec3, rotation: Vec3) -> Self {
        self.camera.offset = offset;
        self.camera.rotation = rotation;
        self
    }

    /// Sets the resolution of the observation.
    pub fn camera_resolution(mut self, width: u32, height: u32) -> Self {
        self.camera.width = width;
        self.camera.height = height;
        self
    }

    /// Sets the field of view of the camera in degrees.
    pub fn camera_fov(mut self, v: f32) -> Self {
        self.camera.field_of_view = v;
        self
    }

    pub fn color_mode(mut self, v: ColorMode) -> Self {
        self.camera.color_mode = v;
        self
    }

    /// Checks the configuration.
    ///
    /// Reward magnitudes must be finite. Their signs are not checked.
    pub fn validate(&self) -> Result<(), KartError> {
        let r = &self.rewards;
        for (name, v) in [
            ("checkpoint_reward", r.checkpoint_reward),
            ("hit_penalty", r.hit_penalty),
            ("time_penalty", r.time_penalty),
            ("speed_reward", r.speed_reward),
            ("lap_reward", r.lap_reward),
        ] {
            if !v.is_finite() {
                return Err(KartError::InvalidConfig(format!(
                    "{} must be finite, got {}",
                    name, v
                )));
            }
        }
        self.camera.validate()
    }

    /// Constructs [`KartAgentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`KartAgentConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
