//! Drives the kart agent with a random policy on a scripted course.
//!
//! Pass the path of a YAML configuration of the agent as the first argument
//! to override the default rewards and camera.
use anyhow::Result;
use kart_agent::{util::test::*, InitMode, KartAgent, KartAgentConfig};
use kart_core::{
    record::{BufferedRecorder, Record},
    DefaultEvaluator, Evaluator as _, Runner, RunnerConfig, WorldEvent,
};

struct TickRecord {
    episode: usize,
    step: usize,
    reward: f32,
    speed: f32,
}

impl TryFrom<&Record> for TickRecord {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            reward: record.get_scalar("reward")?,
            speed: record.get_scalar("speed")?,
        })
    }
}

// A checkpoint every 50 ticks, then a wall.
fn course() -> ScriptedWorld {
    let mut script = vec![vec![]; 260];
    for (i, zone) in [1, 2, 3, 0, 1].iter().enumerate() {
        script[50 * (i + 1) - 1] = vec![WorldEvent::ZoneEntered(*zone)];
    }
    script[259] = vec![WorldEvent::Collision];
    ScriptedWorld::new(script)
}

fn kart(config: KartAgentConfig) -> Result<Agent> {
    KartAgent::build(
        config,
        InitMode::Training,
        Some(MockVehicle::new(spawn_pose()).accel(2.0, 1.0)),
        MockSensor::default(),
        vec![0, 1, 2, 3],
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    let config = match std::env::args().nth(1) {
        Some(path) => KartAgentConfig::load(path)?,
        None => KartAgentConfig::default(),
    };
    let runner_config = RunnerConfig::default().n_episodes(3).max_steps(Some(500));

    let mut runner = Runner::new(runner_config.clone(), kart(config.clone())?, course());
    let mut recorder = BufferedRecorder::new();
    let returns = runner.run(&mut RandomPolicy, &mut recorder)?;
    log::info!("Returns: {:?}", returns);

    let every_100 = |r: &&Record| r.get_scalar("step").map_or(false, |s| s as usize % 100 == 0);
    for record in recorder.iter().filter(every_100) {
        let r = TickRecord::try_from(record)?;
        println!(
            "episode {:2}, step {:3}, speed {:6.3}, reward {:8.4}",
            r.episode, r.step, r.speed, r.reward
        );
    }

    let mut evaluator = DefaultEvaluator::new(runner_config, kart(config)?, course())?;
    let record = evaluator.evaluate(&mut RandomPolicy)?;
    log::info!("Average return: {:?}", record.get_scalar("Episode return")?);

    Ok(())
}
