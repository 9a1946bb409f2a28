//! Reference host scheduler.
mod config;
use crate::{
    record::{Record, RecordValue, Recorder},
    EpisodicAgent, Policy, Step, World, WorldEvent,
};
use anyhow::Result;
use chrono::Local;
pub use config::RunnerConfig;
use log::info;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Drives an [`EpisodicAgent`] in a [`World`].
///
/// At every tick, the runner applies an action to the agent, runs the physics
/// pass of the world, forwards the contact events to the agent and drains the
/// reward contributions of the tick:
///
/// ```mermaid
/// graph LR
///     Policy -->|act| Agent
///     Agent -->|command| Vehicle
///     World -->|zone, collision| Agent
///     Agent -->|contributions| Runner
/// ```
///
/// Contact events raised after the agent terminated the episode are still
/// forwarded; the agent is expected to ignore them.
pub struct Runner<A, W>
where
    A: EpisodicAgent,
    W: World<A::Zone>,
{
    config: RunnerConfig,
    agent: A,
    world: W,

    // Ticks in the current episode
    n_steps: usize,
}

impl<A, W> Runner<A, W>
where
    A: EpisodicAgent,
    W: World<A::Zone>,
{
    /// Constructs a runner.
    pub fn new(config: RunnerConfig, agent: A, world: W) -> Self {
        Self {
            config,
            agent,
            world,
            n_steps: 0,
        }
    }

    /// Returns a reference to the agent.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Returns a mutable reference to the agent.
    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    /// Returns a mutable reference to the world.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Starts a new episode.
    pub fn reset(&mut self) {
        self.world.reset();
        self.agent.on_episode_start();
        self.n_steps = 0;
    }

    /// Performs a tick with the given action.
    pub fn tick(&mut self, act: &A::Act) -> (Step<A>, Record) {
        let mut record = self.agent.step(act);

        for event in self.world.advance() {
            match event {
                WorldEvent::ZoneEntered(zone) => self.agent.on_zone_entered(&zone),
                WorldEvent::Collision => self.agent.on_collision(),
            }
        }
        self.n_steps += 1;

        let is_terminated = self.agent.is_terminated();
        let is_truncated = !is_terminated
            && self
                .config
                .max_steps
                .map_or(false, |max_steps| self.n_steps >= max_steps);
        let step = Step::new(
            act.clone(),
            self.agent.drain_rewards(),
            is_terminated,
            is_truncated,
        );
        record.insert("reward", RecordValue::Scalar(step.reward));
        for c in step.contributions.iter() {
            let key = format!("reward/{:?}", c.kind);
            let v = record.get_scalar(&key).unwrap_or(0.0) + c.magnitude;
            record.insert(key, RecordValue::Scalar(v));
        }

        (step, record)
    }

    /// Runs an episode and returns its return.
    ///
    /// Records of the ticks are written to `recorder`.
    pub fn run_episode<P, R>(&mut self, policy: &mut P, recorder: &mut R, episode: usize) -> f32
    where
        P: Policy<A>,
        R: Recorder,
    {
        self.reset();
        let mut r_total = 0.0;

        loop {
            let act = policy.sample();
            let (step, mut record) = self.tick(&act);
            r_total += step.reward;

            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(self.n_steps as _));
            if step.is_done() {
                record.insert("episode_end", RecordValue::DateTime(Local::now()));
            }
            recorder.write(record);

            if step.is_done() {
                break;
            }
        }
        info!(
            "Episode {:?}, {:?} steps, return = {:?}",
            episode, self.n_steps, r_total
        );

        r_total
    }

    /// Runs the configured number of episodes and returns their returns.
    pub fn run<P, R>(&mut self, policy: &mut P, recorder: &mut R) -> Result<Vec<f32>>
    where
        P: Policy<A>,
        R: Recorder,
    {
        self.config.validate()?;
        if self.config.max_steps.is_none() {
            log::warn!("No step limit; episodes end only when the agent terminates them");
        }

        let mut returns = Vec::with_capacity(self.config.n_episodes);
        for episode in 0..self.config.n_episodes {
            returns.push(self.run_episode(policy, recorder, episode));
        }
        recorder.flush();

        Ok(returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::BufferedRecorder, Act, Contribution, RewardLog};
    use test_log::test;

    #[derive(Clone, Debug)]
    struct Noop;

    impl Act for Noop {}

    #[derive(Default)]
    struct CrashAgent {
        rewards: RewardLog<&'static str>,
        terminated: bool,
    }

    impl EpisodicAgent for CrashAgent {
        type Act = Noop;
        type Zone = u32;
        type RewardKind = &'static str;

        fn step(&mut self, _act: &Noop) -> Record {
            self.rewards.push("time", -1.0);
            Record::empty()
        }

        fn on_episode_start(&mut self) {
            self.rewards.clear();
            self.terminated = false;
        }

        fn on_zone_entered(&mut self, _zone: &u32) {
            self.rewards.push("zone", 10.0);
        }

        fn on_collision(&mut self) {
            self.rewards.push("hit", -5.0);
            self.terminated = true;
        }

        fn drain_rewards(&mut self) -> Vec<Contribution<&'static str>> {
            self.rewards.drain()
        }

        fn is_terminated(&self) -> bool {
            self.terminated
        }
    }

    /// Raises the scripted events, one entry per tick, then nothing.
    struct ScriptedWorld(Vec<Vec<WorldEvent<u32>>>, usize);

    impl World<u32> for ScriptedWorld {
        fn advance(&mut self) -> Vec<WorldEvent<u32>> {
            let events = self.0.get(self.1).cloned().unwrap_or_default();
            self.1 += 1;
            events
        }

        fn reset(&mut self) {
            self.1 = 0;
        }
    }

    struct NoopPolicy;

    impl Policy<CrashAgent> for NoopPolicy {
        fn sample(&mut self) -> Noop {
            Noop
        }
    }

    #[test]
    fn test_collision_terminates_episode() {
        let world = ScriptedWorld(
            vec![vec![WorldEvent::ZoneEntered(1)], vec![WorldEvent::Collision]],
            0,
        );
        let mut runner = Runner::new(RunnerConfig::default(), CrashAgent::default(), world);
        let mut recorder = BufferedRecorder::new();

        let r = runner.run_episode(&mut NoopPolicy, &mut recorder, 0);
        assert_eq!(r, -1.0 + 10.0 - 1.0 - 5.0);
        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_truncation() {
        let config = RunnerConfig::default().n_episodes(2).max_steps(Some(3));
        let mut runner = Runner::new(config, CrashAgent::default(), ScriptedWorld(vec![], 0));
        let mut recorder = BufferedRecorder::new();

        let returns = runner.run(&mut NoopPolicy, &mut recorder).unwrap();
        assert_eq!(returns, vec![-3.0, -3.0]);
        assert_eq!(recorder.len(), 6);
        assert!(!runner.agent().is_terminated());
    }

    #[test]
    fn test_tick_record_itemizes_rewards() {
        let world = ScriptedWorld(vec![vec![WorldEvent::ZoneEntered(1)]], 0);
        let mut runner = Runner::new(RunnerConfig::default(), CrashAgent::default(), world);
        runner.reset();

        let (step, record) = runner.tick(&Noop);
        assert_eq!(step.contributions.len(), 2);
        assert_eq!(record.get_scalar("reward").unwrap(), 9.0);
        assert_eq!(record.get_scalar("reward/\"zone\"").unwrap(), 10.0);
        assert_eq!(record.get_scalar("reward/\"time\"").unwrap(), -1.0);
    }
}
