//! Action for [KartAgent](crate::KartAgent).
use kart_core::Act;
use serde::{Deserialize, Serialize};

/// Half-width of the throttle band mapped to neither accelerate nor brake.
pub const THROTTLE_DEAD_ZONE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Two-component continuous action: steering and throttle/brake.
///
/// Both axes are expected in `[-1, 1]`, but any value is accepted;
/// see [`interpret`].
pub struct KartAct {
    pub steer: f32,
    pub throttle: f32,
}

impl KartAct {
    pub fn new(steer: f32, throttle: f32) -> Self {
        Self { steer, throttle }
    }
}

impl Act for KartAct {}

impl From<[f32; 2]> for KartAct {
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

/// Control input consumed by the vehicle at every tick.
///
/// `accelerate` and `brake` are never both `true`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleCommand {
    pub steering: f32,
    pub accelerate: bool,
    pub brake: bool,
}

impl VehicleCommand {
    /// No steering, no throttle, no brake.
    pub fn neutral() -> Self {
        Self::default()
    }
}

// NaN is mapped to 0 so it never reaches the vehicle.
fn clamp_axis(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

/// Maps raw axes to a [`VehicleCommand`].
pub fn interpret(steer_axis: f32, throttle_axis: f32) -> VehicleCommand {
    let steering = clamp_axis(steer_axis);
    let v = clamp_axis(throttle_axis);

    let (accelerate, brake) = if v > THROTTLE_DEAD_ZONE {
        (true, false)
    } else if v < -THROTTLE_DEAD_ZONE {
        (false, true)
    } else {
        (false, false)
    };

    VehicleCommand {
        steering,
        accelerate,
        brake,
    }
}

impl From<&KartAct> for VehicleCommand {
    fn from(act: &KartAct) -> Self {
        interpret(act.steer, act.throttle)
    }
}
