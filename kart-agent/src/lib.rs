//! Episodic control agent of a kart in a racing simulation.
//!
//! [`KartAgent`] implements [`EpisodicAgent`](kart_core::EpisodicAgent). At
//! every tick it interprets a two-component action (steering, throttle/brake)
//! into a [`VehicleCommand`], pushes it to the [`Vehicle`] and adds a time
//! penalty and a speed bonus to the reward. Checkpoint zones entered in course
//! order add a checkpoint reward; a collision adds a penalty and ends the
//! episode. Every episode starts from the pose the kart had when the agent
//! was first activated.
//!
//! The physics of the kart, the camera pipeline and the trigger geometry are
//! services of the simulation. The agent only talks to them through
//! [`Vehicle`], [`SensorService`] and the events forwarded by the host.
//!
//! Here is an episode driven by the reference runner, with the stand-ins of
//! [`util::test`] in place of the simulation.
//!
//! ```
//! use kart_agent::{util::test::*, KartAct, KartAgentConfig, RewardKind};
//! use kart_core::{Runner, RunnerConfig, WorldEvent};
//!
//! # fn main() -> anyhow::Result<()> {
//! let agent = agent(KartAgentConfig::default())?;
//! let world = ScriptedWorld::new(vec![
//!     vec![WorldEvent::ZoneEntered(1)],
//!     vec![],
//!     vec![WorldEvent::Collision],
//! ]);
//! let mut runner = Runner::new(RunnerConfig::default(), agent, world);
//!
//! runner.reset();
//! let (step, _) = runner.tick(&KartAct::new(0.0, 1.0));
//! assert!(step.contributions.iter().any(|c| c.kind == RewardKind::Checkpoint));
//!
//! let _ = runner.tick(&KartAct::new(0.0, 1.0));
//! let (step, _) = runner.tick(&KartAct::new(0.0, 1.0));
//! assert!(step.is_terminated);
//! # Ok(())
//! # }
//! ```
mod act;
mod agent;
mod checkpoint;
mod manual;
mod reward;
mod sensor;
pub mod util;
mod vehicle;
pub use act::{interpret, KartAct, VehicleCommand, THROTTLE_DEAD_ZONE};
pub use agent::{EpisodeStatus, InitMode, KartAgent, KartAgentConfig, TerminalEvent};
pub use checkpoint::{Advance, CheckpointTracker, LapRule};
pub use manual::{AxisSource, ManualPolicy, HORIZONTAL_AXIS, VERTICAL_AXIS};
pub use reward::{RewardConfig, RewardKind, RewardShaper};
pub use sensor::{CameraSpec, ColorMode, SensorService, SENSOR_NAME};
pub use vehicle::{Pose, Vehicle};
