#![warn(missing_docs)]
//! Core abstractions of episodic control agents.
//!
//! An agent implementing [`EpisodicAgent`] is driven by a host scheduler:
//! it receives one action per tick from a [`Policy`], contact events from a
//! [`World`], and lifecycle callbacks at episode boundaries. Reward is pushed
//! into an append-only [`RewardLog`] which the host drains once per tick.
//!
//! [`Runner`] is a reference host scheduler and [`DefaultEvaluator`] runs
//! a fixed number of episodes with it.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Contribution, EpisodicAgent, Policy, RewardLog, Step, World, WorldEvent};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod runner;
pub use runner::{Runner, RunnerConfig};
