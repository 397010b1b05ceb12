//! Animation driver tests
//!
//! Tests for:
//! - Idempotence for a given elapsed time
//! - Target orbit, bob, spin and colour cycle
//! - Vehicle placement and finite-difference heading
//! - Wheel synchrony
//! - Turret and target camera aiming

use glam::{EulerRot, Quat, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use std::f64::consts::TAU;
use vignette::animation::{AnimationClock, AnimationState};
use vignette::config::VignetteSettings;
use vignette::resources::Color;
use vignette::scene::NodeHandle;
use vignette::{Engine, Scene};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

const SAMPLE_TIMES: [f64; 8] = [0.0, 0.37, 1.0, 2.5, 7.25, 13.9, 31.0, 117.3];

fn engine() -> Engine {
    Engine::new(VignetteSettings::default()).unwrap()
}

/// Reference angle `rate * s`, wrapped in double precision.
fn angle(rate: f64, s: f64) -> f32 {
    (rate * s).rem_euclid(TAU) as f32
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.abs_diff_eq(b, EPSILON) || a.abs_diff_eq(-b, EPSILON)
}

fn world_forward(scene: &mut Scene, handle: NodeHandle, local_forward: Vec3) -> (Vec3, Vec3) {
    let world = scene.world_matrix(handle).unwrap();
    (
        world.translation.into(),
        world.transform_vector3(local_forward).normalize(),
    )
}

fn snapshot(scene: &Scene) -> Vec<(Vec3, Quat, Vec3)> {
    scene
        .iter_nodes()
        .map(|(_, node)| (node.transform.position, node.transform.rotation, node.transform.scale))
        .collect()
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn driver_is_idempotent_for_same_time() {
    let mut engine = engine();
    for s in SAMPLE_TIMES {
        let state = AnimationState::at(s);
        engine.animate(state);
        let first = snapshot(engine.scene());
        engine.animate(state);
        let second = snapshot(engine.scene());

        for ((p1, r1, s1), (p2, r2, s2)) in first.iter().zip(&second) {
            assert!(p1.abs_diff_eq(*p2, 1e-6), "position drifted at s={s}");
            assert!(quat_approx(*r1, *r2), "rotation drifted at s={s}");
            assert_eq!(s1, s2);
        }
    }
}

#[test]
fn driver_does_not_depend_on_history() {
    let mut direct = engine();
    let mut stepped = engine();

    direct.animate(AnimationState::at(9.0));
    for frame in 0..=540 {
        stepped.animate(AnimationState::at(f64::from(frame) / 60.0));
    }

    for ((p1, r1, _), (p2, r2, _)) in snapshot(direct.scene()).iter().zip(&snapshot(stepped.scene())) {
        assert!(p1.abs_diff_eq(*p2, EPSILON));
        assert!(quat_approx(*r1, *r2));
    }
}

// ============================================================================
// Target
// ============================================================================

#[test]
fn target_orbits_bobs_and_spins() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let scene = engine.scene();

        let orbit = scene.get_node(rig.target_orbit).unwrap();
        assert!(quat_approx(orbit.transform.rotation, Quat::from_rotation_y(angle(0.25, s))));

        let bob = scene.get_node(rig.target_bob).unwrap();
        assert!((bob.transform.position.y - 4.0 * angle(2.0, s).sin()).abs() < EPSILON);

        let target = scene.get_node(rig.target_mesh).unwrap();
        let expected = Quat::from_euler(EulerRot::XYZ, angle(7.0, s), angle(13.0, s), 0.0);
        assert!(quat_approx(target.transform.rotation, expected));
    }
}

#[test]
fn target_colour_cycles_hue() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    engine.animate(AnimationState::at(0.0));
    let material = &engine.scene().mesh_of(rig.target_mesh).unwrap().material;
    assert!(material.color.abs_diff_eq(Color::new(0.5, 0.0, 0.0), 1e-6));

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let material = &engine.scene().mesh_of(rig.target_mesh).unwrap().material;
        assert_eq!(material.color, material.emissive);
        let expected = Color::from_hsl((10.0 * s).rem_euclid(1.0) as f32, 1.0, 0.25);
        assert!(material.color.abs_diff_eq(expected, 1e-6));
    }
}

#[test]
fn long_session_keeps_smooth_motion() {
    let mut engine = engine();
    let rig = engine.rig().clone();
    let mut clock = AnimationClock::new();
    clock.advance(0.0);

    let mut hues = Vec::new();
    for frame in 0..120 {
        let state = clock.advance(86_400.0 + f64::from(frame) / 60.0);
        let s = state.elapsed_seconds;
        engine.animate(state);
        let scene = engine.scene();

        let color = scene.mesh_of(rig.target_mesh).unwrap().material.color;
        let expected = Color::from_hsl((10.0 * s).rem_euclid(1.0) as f32, 1.0, 0.25);
        assert!(color.abs_diff_eq(expected, 1e-4), "hue drifted at s={s}");
        if hues.last() != Some(&color) {
            hues.push(color);
        }

        let target = scene.get_node(rig.target_mesh).unwrap();
        let spin = Quat::from_euler(EulerRot::XYZ, angle(7.0, s), angle(13.0, s), 0.0);
        assert!(quat_approx(target.transform.rotation, spin), "spin drifted at s={s}");

        let wheel = scene.get_node(rig.wheels[0]).unwrap();
        let roll = Quat::from_euler(EulerRot::XYZ, angle(3.0, s), 0.0, FRAC_PI_2);
        assert!(quat_approx(wheel.transform.rotation, roll), "wheel drifted at s={s}");
    }

    assert!(hues.len() > 100, "only {} distinct hues", hues.len());
}

// ============================================================================
// Vehicle
// ============================================================================

#[test]
fn vehicle_follows_path_on_ground_plane() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let expected = engine
            .driver()
            .path()
            .point_at((0.05 * s).rem_euclid(1.0) as f32);
        let position = engine.scene().get_node(rig.vehicle).unwrap().transform.position;
        assert!(position.abs_diff_eq(Vec3::new(expected.x, 0.0, expected.y), EPSILON));
    }
}

#[test]
fn vehicle_heads_toward_look_ahead_sample() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        let state = AnimationState::at(s);
        engine.animate(state);
        let (current, ahead) = engine.driver().vehicle_samples(state);
        let expected = (ahead - current).normalize();

        let rotation = engine.scene().get_node(rig.vehicle).unwrap().transform.rotation;
        let forward = rotation * Vec3::Z;
        assert!(forward.y.abs() < EPSILON);
        assert!(Vec2::new(forward.x, forward.z).abs_diff_eq(expected, EPSILON));
    }
}

#[test]
fn vehicle_heading_is_parallel_to_straight_segment() {
    let settings = VignetteSettings {
        path: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(30.0, 20.0),
            Vec2::new(0.0, 20.0),
        ],
        ..Default::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    let rig = engine.rig().clone();

    // t = 0.05 * 5 = 0.25 lies on the span (10,0) -> (20,0)
    engine.animate(AnimationState::at(5.0));
    let vehicle = engine.scene().get_node(rig.vehicle).unwrap();
    let forward = vehicle.transform.rotation * Vec3::Z;
    assert!(forward.abs_diff_eq(Vec3::X, EPSILON));
    assert!((vehicle.transform.position.x - 15.0).abs() < EPSILON);
}

#[test]
fn wheels_spin_in_sync() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let expected = Quat::from_euler(EulerRot::XYZ, angle(3.0, s), 0.0, FRAC_PI_2);
        for wheel in rig.wheels {
            let rotation = engine.scene().get_node(wheel).unwrap().transform.rotation;
            assert!(quat_approx(rotation, expected), "wheel out of sync at s={s}");
        }
    }
}

// ============================================================================
// Aiming
// ============================================================================

#[test]
fn turret_and_its_camera_track_the_target() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let scene = engine.scene_mut();
        let target = scene.world_position(rig.target_mesh).unwrap();

        let (pivot, forward) = world_forward(scene, rig.turret_pivot, Vec3::Z);
        assert!(
            forward.abs_diff_eq((target - pivot).normalize(), EPSILON),
            "turret misses target at s={s}"
        );

        let (eye, view) = world_forward(scene, rig.turret_camera, Vec3::NEG_Z);
        assert!(
            view.abs_diff_eq((target - eye).normalize(), EPSILON),
            "turret camera misses target at s={s}"
        );
    }
}

#[test]
fn target_camera_pivot_tracks_the_vehicle() {
    let mut engine = engine();
    let rig = engine.rig().clone();

    for s in SAMPLE_TIMES {
        engine.animate(AnimationState::at(s));
        let scene = engine.scene_mut();
        let vehicle = scene.world_position(rig.vehicle).unwrap();
        let (pivot, forward) = world_forward(scene, rig.target_camera_pivot, Vec3::Z);
        assert!(forward.abs_diff_eq((vehicle - pivot).normalize(), EPSILON));
    }
}

#[test]
fn initial_frame_scenario() {
    let mut engine = engine();
    let rig = engine.rig().clone();
    engine.animate(AnimationState::at(0.0));
    let scene = engine.scene_mut();

    let vehicle = scene.world_position(rig.vehicle).unwrap();
    assert!(vehicle.abs_diff_eq(Vec3::new(-10.0, 0.0, 0.0), EPSILON));

    let bob = scene.get_node(rig.target_bob).unwrap();
    assert!(bob.transform.position.y.abs() < EPSILON);

    // Orbit at rest: target sits at the elevation offset
    let target = scene.world_position(rig.target_mesh).unwrap();
    assert!(target.abs_diff_eq(Vec3::new(0.0, 8.0, 16.0), EPSILON));

    let (pivot, forward) = world_forward(scene, rig.turret_pivot, Vec3::Z);
    assert!(forward.abs_diff_eq((target - pivot).normalize(), EPSILON));
}
