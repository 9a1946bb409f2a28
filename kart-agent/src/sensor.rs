//! Configuration of the visual observation sensor.
//!
//! The agent does not process images. It only describes the camera mounted
//! on the kart; the simulation renders it and delivers the frames to the
//! policy on its own.
use anyhow::Result;
use glam::{EulerRot, Quat, Vec3};
use kart_core::error::KartError;
use serde::{Deserialize, Serialize};

/// Name under which the camera sensor is registered.
pub const SENSOR_NAME: &str = "Vision";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pixel format of the observation.
pub enum ColorMode {
    Rgb,
    Grayscale,
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Rgb
    }
}

/// Geometry and format of the camera mounted on the kart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    /// Offset from the kart origin, in the local frame of the kart.
    pub offset: Vec3,

    /// Euler angles in degrees, applied in the order z, x, y.
    pub rotation: Vec3,

    /// Vertical field of view in degrees.
    pub field_of_view: f32,

    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
    pub near_clip: f32,
    pub far_clip: f32,

    /// Whether the simulation also shows the camera on screen.
    /// Off during training, which renders faster.
    pub runtime_camera_enable: bool,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 1.5, 2.0),
            rotation: Vec3::ZERO,
            field_of_view: 60.0,
            width: 84,
            height: 84,
            color_mode: ColorMode::Rgb,
            near_clip: 0.1,
            far_clip: 200.0,
            runtime_camera_enable: false,
        }
    }
}

impl CameraSpec {
    /// Local rotation of the camera relative to the kart.
    pub fn local_rotation(&self) -> Quat {
        let r = self.rotation;
        Quat::from_euler(
            EulerRot::YXZ,
            r.y.to_radians(),
            r.x.to_radians(),
            r.z.to_radians(),
        )
    }

    /// Checks the values the renderer cannot accept.
    pub fn validate(&self) -> Result<(), KartError> {
        if self.width == 0 || self.height == 0 {
            return Err(KartError::InvalidConfig(format!(
                "camera resolution must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(KartError::InvalidConfig(format!(
                "camera field of view must be in (0, 180), got {}",
                self.field_of_view
            )));
        }
        if !(self.near_clip > 0.0 && self.near_clip < self.far_clip) {
            return Err(KartError::InvalidConfig(format!(
                "camera clip planes must satisfy 0 < near < far, got {} and {}",
                self.near_clip, self.far_clip
            )));
        }
        Ok(())
    }
}

/// The sensor pipeline of the simulation.
pub trait SensorService {
    /// Mounts a camera on the kart and registers it as a sensor under `name`.
    fn attach(&mut self, name: &str, spec: &CameraSpec) -> Result<()>;

    /// Removes the camera mounted by [`SensorService::attach`].
    fn detach(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_rotation_yaw() {
        let spec = CameraSpec {
            rotation: Vec3::new(0.0, 90.0, 0.0),
            ..Default::default()
        };
        let forward = spec.local_rotation() * Vec3::Z;
        assert!((forward - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_validate() {
        assert!(CameraSpec::default().validate().is_ok());

        let spec = CameraSpec {
            width: 0,
            ..Default::default()
        };
        assert!(spec.validate().is_err());

        let spec = CameraSpec {
            near_clip: 300.0,
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }
}
