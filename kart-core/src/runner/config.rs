//! Configuration of [`Runner`](super::Runner).
use crate::error::KartError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Runner`](super::Runner).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct RunnerConfig {
    /// The number of episodes run by [`Runner::run`](super::Runner::run).
    pub n_episodes: usize,

    /// The maximum number of ticks of an episode.
    ///
    /// An episode reaching this limit is truncated by the host.
    /// `None` lets episodes run until the agent terminates them.
    pub max_steps: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            n_episodes: 1,
            max_steps: Some(1000),
        }
    }
}

impl RunnerConfig {
    /// Sets the number of episodes.
    pub fn n_episodes(mut self, v: usize) -> Self {
        self.n_episodes = v;
        self
    }

    /// Sets the maximum number of ticks of an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), KartError> {
        if self.max_steps == Some(0) {
            return Err(KartError::InvalidConfig(
                "max_steps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Constructs [`RunnerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`RunnerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_runner_config() -> Result<()> {
        let config = RunnerConfig::default().n_episodes(5).max_steps(None);

        let dir = TempDir::new("runner_config")?;
        let path = dir.path().join("runner_config.yaml");
        println!("{:?}", path);

        config.save(&path)?;
        let config_ = RunnerConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_zero_max_steps_is_invalid() {
        let config = RunnerConfig::default().max_steps(Some(0));
        assert!(config.validate().is_err());
        assert!(RunnerConfig::default().validate().is_ok());
    }
}
