//! Evaluate [`Policy`].
use crate::{record::Record, EpisodicAgent, Policy};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::DefaultEvaluator;

/// Evaluate [`Policy`].
pub trait Evaluator<A: EpisodicAgent> {
    /// Evaluate [`Policy`].
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<A>;
}
