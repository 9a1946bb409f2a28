//! Core functionalities.
mod agent;
mod policy;
mod reward;
mod step;
mod world;
pub use agent::EpisodicAgent;
pub use policy::Policy;
pub(crate) use reward::sum;
pub use reward::{Contribution, RewardLog};
use std::fmt::Debug;
pub use step::Step;
pub use world::{World, WorldEvent};

/// An action delivered to an agent at every tick.
pub trait Act: Clone + Debug {}
