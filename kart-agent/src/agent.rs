//! Episodic control agent of a kart.
mod config;
use crate::{
    CheckpointTracker, KartAct, Pose, RewardKind, RewardShaper, SensorService, Vehicle,
    VehicleCommand, SENSOR_NAME,
};
use anyhow::Result;
pub use config::KartAgentConfig;
use kart_core::{
    record::{Record, RecordValue},
    Contribution, EpisodicAgent,
};
use log::{debug, info, warn};

/// How the agent is set up when built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// The simulation runs and the policy consumes camera frames.
    /// The camera sensor is mounted.
    Training,

    /// Scene inspection or previews where no frame is consumed.
    /// No sensor is mounted.
    Interactive,
}

/// Event that ended an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Collision,
    LapComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    Running,
    Terminated(TerminalEvent),
}

/// Control loop of a single kart.
///
/// The agent turns actions into [`VehicleCommand`]s, tracks the checkpoints
/// passed in order, shapes the reward and ends episodes on collision. The
/// vehicle, the camera pipeline and the trigger geometry belong to the
/// simulation and are reached through [`Vehicle`], [`SensorService`] and the
/// events forwarded by the host.
///
/// The pose of the kart is captured the first time the agent is activated and
/// every episode starts from that pose, wherever the previous one ended.
///
/// The vehicle is optional. Without it, ticks are skipped and only the
/// contact events are handled.
pub struct KartAgent<V, S, Z> {
    config: KartAgentConfig,
    mode: InitMode,
    vehicle: Option<V>,
    sensor: S,
    sensor_attached: bool,

    // Last interpreted command, also pulled through `generate_input()`
    command: VehicleCommand,

    checkpoints: CheckpointTracker<Z>,
    shaper: RewardShaper,

    // Set once, never reassigned
    spawn: Option<Pose>,

    status: EpisodeStatus,
}

impl<V, S, Z> KartAgent<V, S, Z>
where
    V: Vehicle,
    S: SensorService,
    Z: PartialEq,
{
    /// Builds an agent.
    ///
    /// `checkpoints` lists the identifiers of the checkpoint zones in course
    /// order. The kart is expected to start at or behind the first one.
    pub fn build(
        config: KartAgentConfig,
        mode: InitMode,
        vehicle: Option<V>,
        sensor: S,
        checkpoints: Vec<Z>,
    ) -> Result<Self> {
        config.validate()?;
        if vehicle.is_none() {
            log::error!("KartAgent: vehicle not found; ticks will be skipped");
        }

        let mut agent = Self {
            shaper: RewardShaper::new(config.rewards.clone()),
            checkpoints: CheckpointTracker::new(checkpoints, config.lap_rule),
            config,
            mode,
            vehicle,
            sensor,
            sensor_attached: false,
            command: VehicleCommand::neutral(),
            spawn: None,
            status: EpisodeStatus::Running,
        };

        if mode == InitMode::Training {
            agent.setup_sensor()?;
        }
        info!(
            "KartAgent built ({:?}, {} checkpoints)",
            mode,
            agent.checkpoints.len()
        );

        Ok(agent)
    }

    /// Mounts the camera sensor, replacing the one mounted before, if any.
    ///
    /// [`KartAgent::build`] calls this in [`InitMode::Training`].
    pub fn setup_sensor(&mut self) -> Result<()> {
        if self.sensor_attached {
            self.sensor.detach();
            self.sensor_attached = false;
        }
        self.sensor.attach(SENSOR_NAME, &self.config.camera)?;
        self.sensor_attached = true;
        debug!("Camera sensor {:?} attached: {:?}", SENSOR_NAME, self.config.camera);
        Ok(())
    }

    /// Captures the spawn pose if it was not captured yet.
    ///
    /// Called by the first tick or episode start. Later calls do nothing.
    pub fn activate(&mut self) {
        if self.spawn.is_some() {
            return;
        }
        if let Some(vehicle) = self.vehicle.as_ref() {
            let pose = vehicle.pose();
            debug!("Spawn pose captured: {:?}", pose);
            self.spawn = Some(pose);
        }
    }

    /// Returns the input for vehicles pulling it rather than being pushed.
    pub fn generate_input(&self) -> VehicleCommand {
        self.command
    }

    fn terminate(&mut self, event: TerminalEvent) {
        debug!(
            "Episode terminated by {:?}, return = {:?}",
            event,
            self.shaper.episode_total()
        );
        self.status = EpisodeStatus::Terminated(event);
    }

    pub fn config(&self) -> &KartAgentConfig {
        &self.config
    }

    pub fn mode(&self) -> InitMode {
        self.mode
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn spawn(&self) -> Option<Pose> {
        self.spawn
    }

    /// Index of the last checkpoint passed.
    pub fn checkpoint_index(&self) -> usize {
        self.checkpoints.index()
    }

    pub fn laps(&self) -> usize {
        self.checkpoints.laps()
    }

    /// Sum of the rewards of the current episode.
    pub fn episode_reward(&self) -> f32 {
        self.shaper.episode_total()
    }

    /// Contributions not drained yet.
    pub fn pending_rewards(&self) -> &[Contribution<RewardKind>] {
        self.shaper.pending()
    }

    pub fn vehicle(&self) -> Option<&V> {
        self.vehicle.as_ref()
    }

    pub fn vehicle_mut(&mut self) -> Option<&mut V> {
        self.vehicle.as_mut()
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn is_sensor_attached(&self) -> bool {
        self.sensor_attached
    }
}

impl<V, S, Z> EpisodicAgent for KartAgent<V, S, Z>
where
    V: Vehicle,
    S: SensorService,
    Z: PartialEq,
{
    type Act = KartAct;
    type Zone = Z;
    type RewardKind = RewardKind;

    fn step(&mut self, act: &KartAct) -> Record {
        if self.is_terminated() {
            debug!("Tick after termination ignored");
            return Record::empty();
        }
        self.activate();
        let vehicle = match self.vehicle.as_mut() {
            Some(vehicle) => vehicle,
            None => {
                warn!("No vehicle; tick skipped");
                return Record::empty();
            }
        };

        self.command = act.into();
        vehicle.apply(self.command);

        let speed = vehicle.normalized_speed();
        self.shaper.on_step(speed);

        Record::from_slice(&[
            ("steering", RecordValue::Scalar(self.command.steering)),
            ("accelerate", RecordValue::Scalar(self.command.accelerate as u8 as f32)),
            ("brake", RecordValue::Scalar(self.command.brake as u8 as f32)),
            ("speed", RecordValue::Scalar(speed)),
        ])
    }

    fn on_episode_start(&mut self) {
        self.activate();
        if let Some(vehicle) = self.vehicle.as_mut() {
            if let Some(spawn) = self.spawn {
                vehicle.set_pose(spawn);
            }
            vehicle.reset_velocities();
        }

        self.checkpoints.reset();
        self.command = VehicleCommand::neutral();
        self.shaper.reset();
        self.status = EpisodeStatus::Running;
        info!("Episode start");
    }

    fn on_zone_entered(&mut self, zone: &Z) {
        if self.is_terminated() {
            debug!("Zone entry after termination ignored");
            return;
        }
        let advance = match self.checkpoints.on_zone_entered(zone) {
            Some(advance) => advance,
            None => return,
        };

        debug!("Checkpoint {} passed", advance.index);
        self.shaper.on_checkpoint();

        if advance.lap_completed {
            debug!("Lap {} completed", self.checkpoints.laps());
            self.shaper.on_lap();
            if self.config.terminate_on_lap_complete {
                self.terminate(TerminalEvent::LapComplete);
            }
        }
    }

    fn on_collision(&mut self) {
        if self.is_terminated() {
            debug!("Collision after termination ignored");
            return;
        }
        self.shaper.on_hit();
        self.terminate(TerminalEvent::Collision);
    }

    fn drain_rewards(&mut self) -> Vec<Contribution<RewardKind>> {
        self.shaper.drain()
    }

    fn is_terminated(&self) -> bool {
        matches!(self.status, EpisodeStatus::Terminated(_))
    }
}
