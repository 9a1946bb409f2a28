//! Manual override of the policy.
use crate::KartAct;
use kart_core::{EpisodicAgent, Policy};

/// Name of the steering axis.
pub const HORIZONTAL_AXIS: &str = "Horizontal";

/// Name of the throttle/brake axis.
pub const VERTICAL_AXIS: &str = "Vertical";

/// Raw control axes of an input device (keyboard, gamepad, wheel).
pub trait AxisSource {
    /// Current value of the axis of the given name. Unknown axes read 0.
    fn axis(&self, name: &str) -> f32;
}

/// A policy reading the action from an input device.
///
/// Used for testing and for collecting demonstrations. The raw axes are
/// passed through unchanged; clamping happens in the agent like for any
/// other policy.
pub struct ManualPolicy<I> {
    input: I,
}

impl<I: AxisSource> ManualPolicy<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

impl<I, A> Policy<A> for ManualPolicy<I>
where
    I: AxisSource,
    A: EpisodicAgent<Act = KartAct>,
{
    fn sample(&mut self) -> KartAct {
        KartAct::new(
            self.input.axis(HORIZONTAL_AXIS),
            self.input.axis(VERTICAL_AXIS),
        )
    }
}
