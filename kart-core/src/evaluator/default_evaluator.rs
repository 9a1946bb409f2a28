//! Default implementation of the [`Evaluator`] trait.
use super::Evaluator;
use crate::{
    record::{NullRecorder, Record},
    EpisodicAgent, Policy, Runner, RunnerConfig, World,
};
use anyhow::Result;

/// Runs a fixed number of episodes and reports the average return.
///
/// ```ignore
/// let mut evaluator = DefaultEvaluator::new(RunnerConfig::default().n_episodes(10), agent, world)?;
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<A, W>
where
    A: EpisodicAgent,
    W: World<A::Zone>,
{
    runner: Runner<A, W>,
}

impl<A, W> Evaluator<A> for DefaultEvaluator<A, W>
where
    A: EpisodicAgent,
    W: World<A::Zone>,
{
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<A>,
    {
        log::debug!("Evaluation");
        let returns = self.runner.run(policy, &mut NullRecorder::default())?;
        let r_mean = returns.iter().sum::<f32>() / returns.len() as f32;
        log::info!("Average return: {:?}", r_mean);

        Ok(Record::from_scalar("Episode return", r_mean))
    }
}

impl<A, W> DefaultEvaluator<A, W>
where
    A: EpisodicAgent,
    W: World<A::Zone>,
{
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// Fails if the configuration runs no episode.
    pub fn new(config: RunnerConfig, agent: A, world: W) -> Result<Self> {
        if config.n_episodes == 0 {
            anyhow::bail!("evaluation needs at least one episode");
        }
        config.validate()?;

        Ok(Self {
            runner: Runner::new(config, agent, world),
        })
    }

    /// Returns a reference to the agent.
    pub fn agent(&self) -> &A {
        self.runner.agent()
    }
}
