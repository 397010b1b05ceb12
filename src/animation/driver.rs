//! Animation Driver
//!
//! Writes the per-frame local transforms of every moving node in the rig.
//! The result depends on the [`AnimationState`] alone: the driver keeps no
//! state between frames and running it twice with the same elapsed time
//! leaves the scene unchanged the second time.
//!
//! Order within a frame:
//! 1. target orbit, bob, spin and colour
//! 2. vehicle placement on the path, heading from a look-ahead sample
//! 3. wheel spin
//! 4. turret pivot and turret camera aimed at the target
//! 5. target camera pivot aimed at the vehicle
//!
//! Steps 4-5 query world positions, which are resolved through the
//! ancestor chain after steps 1-3 have written their local transforms.

use std::f32::consts::FRAC_PI_2;
use std::f64::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use crate::animation::clock::AnimationState;
use crate::animation::path::Path;
use crate::config::Choreography;
use crate::resources::color::Color;
use crate::rig::Rig;
use crate::scene::Scene;

pub struct AnimationDriver {
    choreography: Choreography,
    path: Path,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(choreography: Choreography, path: Path) -> Self {
        Self { choreography, path }
    }

    #[must_use]
    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path samples for the vehicle at `state`: its position and the
    /// look-ahead point that defines its heading.
    #[must_use]
    pub fn vehicle_samples(&self, state: AnimationState) -> (Vec2, Vec2) {
        let t = state.phase(self.choreography.path_speed, 1.0);
        let current = self.path.point_at(t);
        let ahead = self
            .path
            .point_at((t + self.choreography.look_ahead).rem_euclid(1.0));
        (current, ahead)
    }

    /// Colour shared by the target's base and emissive channels at `state`.
    #[must_use]
    pub fn target_color(&self, state: AnimationState) -> Color {
        let c = &self.choreography;
        Color::from_hsl(
            state.phase(c.hue_rate, 1.0),
            c.hue_saturation,
            c.hue_lightness,
        )
    }

    /// Applies the choreography at `state` to the rig's nodes.
    pub fn animate(&self, scene: &mut Scene, rig: &Rig, state: AnimationState) {
        let c = &self.choreography;
        let angle = |rate: f32| state.phase(rate, TAU);

        // Target
        if let Some(orbit) = scene.get_node_mut(rig.target_orbit) {
            orbit.transform.rotation = Quat::from_rotation_y(angle(c.orbit_rate));
        }
        if let Some(bob) = scene.get_node_mut(rig.target_bob) {
            bob.transform.position.y = c.bob_amplitude * angle(c.bob_frequency).sin();
        }
        if let Some(target) = scene.get_node_mut(rig.target_mesh) {
            target
                .transform
                .set_rotation_euler(angle(c.spin_pitch_rate), angle(c.spin_yaw_rate), 0.0);
        }
        let color = self.target_color(state);
        if let Some(mesh) = scene.mesh_of_mut(rig.target_mesh) {
            mesh.material.color = color;
            mesh.material.emissive = color;
        }

        // Vehicle
        let (current, ahead) = self.vehicle_samples(state);
        if let Some(vehicle) = scene.get_node_mut(rig.vehicle) {
            vehicle.transform.position = Vec3::new(current.x, 0.0, current.y);
        }
        scene.look_at(rig.vehicle, Vec3::new(ahead.x, 0.0, ahead.y), Vec3::Y);

        for &wheel in &rig.wheels {
            if let Some(node) = scene.get_node_mut(wheel) {
                node.transform
                    .set_rotation_euler(angle(c.wheel_spin_rate), 0.0, FRAC_PI_2);
            }
        }

        // Turret and its camera both track the target.
        if let Some(target_position) = scene.world_position(rig.target_mesh) {
            scene.look_at(rig.turret_pivot, target_position, Vec3::Y);
            scene.look_at(rig.turret_camera, target_position, Vec3::Y);
        }

        // The target's camera tracks the vehicle.
        if let Some(vehicle_position) = scene.world_position(rig.vehicle) {
            scene.look_at(rig.target_camera_pivot, vehicle_position, Vec3::Y);
        }

        log::trace!(
            "animated frame at {:.3}s: vehicle at ({:.2}, {:.2})",
            state.elapsed_seconds,
            current.x,
            current.y
        );
    }
}
