//! Vignette Settings
//!
//! Fixed configuration for the rig geometry, the choreography rates, the
//! camera projections and the vehicle path. Every `Default` reproduces the
//! reference choreography; hosts normally use [`VignetteSettings::default`]
//! and only override individual fields for experiments.
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette::config::{Choreography, VignetteSettings};
//!
//! let slow = VignetteSettings {
//!     choreography: Choreography {
//!         path_speed: 0.02,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! slow.validate()?;
//! ```

use glam::{Vec2, Vec3};

use crate::errors::{Result, VignetteError};

// ---------------------------------------------------------------------------
// RigDimensions
// ---------------------------------------------------------------------------

/// Geometric constants of the vehicle and the target.
///
/// | Field                 | Default |
/// |-----------------------|---------|
/// | `vehicle_width`       | 4.0     |
/// | `vehicle_height`      | 1.0     |
/// | `vehicle_length`      | 8.0     |
/// | `wheel_radius`        | 1.0     |
/// | `wheel_thickness`     | 0.5     |
/// | `wheel_segments`      | 6       |
/// | `dome_radius`         | 2.0     |
/// | `turret_scale`        | 5.0     |
/// | `turret_length_ratio` | 0.15    |
/// | `target_height`       | 8.0     |
/// | `target_radius`       | 0.5     |
/// | `ground_size`         | 50.0    |
#[derive(Debug, Clone, PartialEq)]
pub struct RigDimensions {
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    pub vehicle_length: f32,
    pub wheel_radius: f32,
    pub wheel_thickness: f32,
    pub wheel_segments: u32,
    pub dome_radius: f32,
    /// Uniform scale applied to the turret pivot.
    pub turret_scale: f32,
    /// Turret barrel length as a fraction of the vehicle length.
    pub turret_length_ratio: f32,
    /// Height of the target's elevation offset above the orbit root.
    pub target_height: f32,
    pub target_radius: f32,
    pub ground_size: f32,
}

impl Default for RigDimensions {
    fn default() -> Self {
        Self {
            vehicle_width: 4.0,
            vehicle_height: 1.0,
            vehicle_length: 8.0,
            wheel_radius: 1.0,
            wheel_thickness: 0.5,
            wheel_segments: 6,
            dome_radius: 2.0,
            turret_scale: 5.0,
            turret_length_ratio: 0.15,
            target_height: 8.0,
            target_radius: 0.5,
            ground_size: 50.0,
        }
    }
}

impl RigDimensions {
    /// Local positions of the six wheels relative to the vehicle body.
    ///
    /// Wheels sit half the body width plus half the wheel thickness out to
    /// each side, at the body's underside, at three evenly spaced stations
    /// (`+length/3`, `0`, `-length/3`). Order is front-left, front-right,
    /// middle-left, middle-right, rear-left, rear-right.
    #[must_use]
    pub fn wheel_positions(&self) -> [Vec3; 6] {
        let x = self.vehicle_width / 2.0 + self.wheel_thickness / 2.0;
        let y = -self.vehicle_height / 2.0;
        let z = self.vehicle_length / 3.0;
        [
            Vec3::new(-x, y, z),
            Vec3::new(x, y, z),
            Vec3::new(-x, y, 0.0),
            Vec3::new(x, y, 0.0),
            Vec3::new(-x, y, -z),
            Vec3::new(x, y, -z),
        ]
    }

    #[inline]
    #[must_use]
    pub fn turret_length(&self) -> f32 {
        self.vehicle_length * self.turret_length_ratio
    }

    /// Offset of the target's elevation node from the orbit root.
    #[inline]
    #[must_use]
    pub fn target_elevation(&self) -> Vec3 {
        Vec3::new(0.0, self.target_height, self.vehicle_length * 2.0)
    }
}

// ---------------------------------------------------------------------------
// Choreography
// ---------------------------------------------------------------------------

/// Rates and amplitudes of the procedural motion, all expressed against
/// elapsed seconds `s`.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    /// Target orbit yaw = `orbit_rate * s`.
    pub orbit_rate: f32,
    /// Target bob height = `bob_amplitude * sin(bob_frequency * s)`.
    pub bob_amplitude: f32,
    pub bob_frequency: f32,
    /// Target mesh pitch = `spin_pitch_rate * s`.
    pub spin_pitch_rate: f32,
    /// Target mesh yaw = `spin_yaw_rate * s`.
    pub spin_yaw_rate: f32,
    /// Target hue = `(hue_rate * s) mod 1`.
    pub hue_rate: f32,
    pub hue_saturation: f32,
    pub hue_lightness: f32,
    /// Path parameter = `path_speed * s`.
    pub path_speed: f32,
    /// Parameter offset of the heading sample.
    pub look_ahead: f32,
    /// Wheel angle = `wheel_spin_rate * s`.
    pub wheel_spin_rate: f32,
    /// Active camera = `floor(camera_cycle_rate * s) mod camera_count`.
    pub camera_cycle_rate: f32,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            orbit_rate: 0.25,
            bob_amplitude: 4.0,
            bob_frequency: 2.0,
            spin_pitch_rate: 7.0,
            spin_yaw_rate: 13.0,
            hue_rate: 10.0,
            hue_saturation: 1.0,
            hue_lightness: 0.25,
            path_speed: 0.05,
            look_ahead: 0.01,
            wheel_spin_rate: 3.0,
            camera_cycle_rate: 0.25,
        }
    }
}

// ---------------------------------------------------------------------------
// CameraSettings
// ---------------------------------------------------------------------------

/// Projection parameters shared by the four cameras.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view of the detached, turret and target cameras (degrees).
    pub default_fov: f32,
    /// Vertical field of view of the vehicle-mounted camera (degrees).
    pub vehicle_fov: f32,
    pub near: f32,
    pub far: f32,
    /// World position of the detached camera. It is aimed at the origin once.
    pub detached_position: Vec3,
    /// Aspect ratio used until the first viewport reconciliation.
    pub initial_aspect: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            default_fov: 45.0,
            vehicle_fov: 75.0,
            near: 0.1,
            far: 1000.0,
            detached_position: Vec3::new(8.0, 4.0, 10.0) * 3.0,
            initial_aspect: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// VignetteSettings
// ---------------------------------------------------------------------------

/// Reference control points of the vehicle's closed path. The final point
/// repeats the first to close the loop.
pub const REFERENCE_PATH: [Vec2; 10] = [
    Vec2::new(-10.0, 0.0),
    Vec2::new(-5.0, 5.0),
    Vec2::new(0.0, 0.0),
    Vec2::new(5.0, -5.0),
    Vec2::new(10.0, 0.0),
    Vec2::new(5.0, 10.0),
    Vec2::new(-5.0, 10.0),
    Vec2::new(-10.0, -10.0),
    Vec2::new(-15.0, -8.0),
    Vec2::new(-10.0, 0.0),
];

/// Top-level configuration consumed once by [`Engine::new`](crate::Engine::new).
#[derive(Debug, Clone, PartialEq)]
pub struct VignetteSettings {
    pub dimensions: RigDimensions,
    pub choreography: Choreography,
    pub cameras: CameraSettings,
    /// Control points of the vehicle path on the ground plane (x, z).
    pub path: Vec<Vec2>,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            dimensions: RigDimensions::default(),
            choreography: Choreography::default(),
            cameras: CameraSettings::default(),
            path: REFERENCE_PATH.to_vec(),
        }
    }
}

impl VignetteSettings {
    /// Rejects settings that would produce a degenerate rig or projection.
    ///
    /// Path degeneracy is reported separately by [`Path::new`](crate::animation::Path::new).
    pub fn validate(&self) -> Result<()> {
        let d = &self.dimensions;
        let positive = [
            ("vehicle_width", d.vehicle_width),
            ("vehicle_height", d.vehicle_height),
            ("vehicle_length", d.vehicle_length),
            ("wheel_radius", d.wheel_radius),
            ("wheel_thickness", d.wheel_thickness),
            ("dome_radius", d.dome_radius),
            ("turret_scale", d.turret_scale),
            ("turret_length_ratio", d.turret_length_ratio),
            ("target_radius", d.target_radius),
            ("ground_size", d.ground_size),
            ("camera_cycle_rate", self.choreography.camera_cycle_rate),
            ("look_ahead", self.choreography.look_ahead),
            ("near", self.cameras.near),
            ("initial_aspect", self.cameras.initial_aspect),
        ];

        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(VignetteError::InvalidSettings(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if d.wheel_segments < 3 {
            return Err(VignetteError::InvalidSettings(format!(
                "wheel_segments must be at least 3, got {}",
                d.wheel_segments
            )));
        }

        if self.cameras.far <= self.cameras.near {
            return Err(VignetteError::InvalidSettings(format!(
                "far plane ({}) must lie beyond near plane ({})",
                self.cameras.far, self.cameras.near
            )));
        }

        for (name, fov) in [
            ("default_fov", self.cameras.default_fov),
            ("vehicle_fov", self.cameras.vehicle_fov),
        ] {
            if !(fov > 0.0 && fov < 180.0) {
                return Err(VignetteError::InvalidSettings(format!(
                    "{name} must lie in (0, 180) degrees, got {fov}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        assert!(VignetteSettings::default().validate().is_ok());
    }

    #[test]
    fn wheel_positions_straddle_the_body() {
        let d = RigDimensions::default();
        let wheels = d.wheel_positions();
        // 4/2 + 0.5/2
        assert!(wheels.iter().all(|w| (w.x.abs() - 2.25).abs() < 1e-6));
        assert!(wheels.iter().all(|w| (w.y + 0.5).abs() < 1e-6));
        let stations: Vec<f32> = wheels.iter().map(|w| w.z).collect();
        assert!((stations[0] - 8.0 / 3.0).abs() < 1e-6);
        assert!(stations[2].abs() < 1e-6);
        assert!((stations[4] + 8.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_width_is_rejected() {
        let mut settings = VignetteSettings::default();
        settings.dimensions.vehicle_width = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(VignetteError::InvalidSettings(_))
        ));
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let mut settings = VignetteSettings::default();
        settings.cameras.far = 0.05;
        assert!(settings.validate().is_err());
    }
}
