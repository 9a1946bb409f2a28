//! Reward shaping.
use kart_core::{Contribution, RewardLog};
use serde::{Deserialize, Serialize};

/// Source of a reward contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardKind {
    /// Constant penalty of every tick.
    Time,
    /// Bonus proportional to the speed of the kart.
    Speed,
    /// A checkpoint passed in order.
    Checkpoint,
    /// A full cycle of checkpoints.
    Lap,
    /// A collision.
    Hit,
}

/// Magnitudes of the reward contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub checkpoint_reward: f32,
    pub hit_penalty: f32,
    pub time_penalty: f32,

    /// Reward per unit of normalized speed and tick.
    /// Too large a value teaches the kart to chase speed only.
    pub speed_reward: f32,

    /// Bonus of a completed lap. Zero adds no contribution.
    #[serde(default)]
    pub lap_reward: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            checkpoint_reward: 10.0,
            hit_penalty: -1.0,
            time_penalty: -0.001,
            speed_reward: 0.001,
            lap_reward: 0.0,
        }
    }
}

/// Turns ticks and events into reward contributions.
#[derive(Debug, Clone)]
pub struct RewardShaper {
    config: RewardConfig,
    log: RewardLog<RewardKind>,
}

impl RewardShaper {
    pub fn new(config: RewardConfig) -> Self {
        Self {
            config,
            log: RewardLog::default(),
        }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Adds the time penalty and the speed bonus of a tick.
    ///
    /// `speed` must be read after the action of the tick was applied.
    pub fn on_step(&mut self, speed: f32) {
        self.log.push(RewardKind::Time, self.config.time_penalty);
        self.log
            .push(RewardKind::Speed, speed * self.config.speed_reward);
    }

    pub fn on_checkpoint(&mut self) {
        self.log
            .push(RewardKind::Checkpoint, self.config.checkpoint_reward);
    }

    pub fn on_lap(&mut self) {
        if self.config.lap_reward != 0.0 {
            self.log.push(RewardKind::Lap, self.config.lap_reward);
        }
    }

    pub fn on_hit(&mut self) {
        self.log.push(RewardKind::Hit, self.config.hit_penalty);
    }

    /// Takes the contributions added since the last call.
    pub fn drain(&mut self) -> Vec<Contribution<RewardKind>> {
        self.log.drain()
    }

    /// Contributions not drained yet.
    pub fn pending(&self) -> &[Contribution<RewardKind>] {
        self.log.pending()
    }

    /// Sum of the contributions of the current episode.
    pub fn episode_total(&self) -> f32 {
        self.log.episode_total()
    }

    /// Forgets everything of the previous episode.
    pub fn reset(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_contribution() {
        let mut shaper = RewardShaper::new(RewardConfig::default());
        shaper.on_step(5.0);

        let c = shaper.drain();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0], Contribution::new(RewardKind::Time, -0.001));
        assert_eq!(c[1].kind, RewardKind::Speed);
        assert!((c[1].magnitude - 0.005).abs() < 1e-7);

        let total: f32 = c.iter().map(|c| c.magnitude).sum();
        assert!((total - 0.004).abs() < 1e-7);
    }

    #[test]
    fn test_reset_clears_episode_total() {
        let mut shaper = RewardShaper::new(RewardConfig::default());
        shaper.on_checkpoint();
        shaper.on_hit();
        assert_eq!(shaper.episode_total(), 9.0);

        shaper.reset();
        assert!(shaper.pending().is_empty());
        assert_eq!(shaper.episode_total(), 0.0);
    }

    #[test]
    fn test_zero_lap_reward_adds_nothing() {
        let mut shaper = RewardShaper::new(RewardConfig::default());
        shaper.on_lap();
        assert!(shaper.pending().is_empty());

        let mut shaper = RewardShaper::new(RewardConfig {
            lap_reward: 5.0,
            ..Default::default()
        });
        shaper.on_lap();
        assert_eq!(shaper.drain(), vec![Contribution::new(RewardKind::Lap, 5.0)]);
    }
}
