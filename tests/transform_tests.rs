//! Transform and TransformSystem tests
//!
//! Tests for:
//! - Transform TRS operations and dirty checking
//! - Euler angle round-trips
//! - look_at_rotation for objects and cameras
//! - Hierarchical matrix propagation
//! - On-demand ancestor chain resolution

use glam::{Affine3A, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use vignette::scene::camera::Camera;
use vignette::scene::node::Node;
use vignette::scene::transform::{ForwardAxis, Transform, look_at_rotation};
use vignette::scene::{NodeHandle, Scene};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform Unit Tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always rebuilds
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.rotation = Quat::from_rotation_y(0.3);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn transform_euler_round_trip() {
    let mut t = Transform::new();
    t.set_rotation_euler(0.3, -0.7, FRAC_PI_4);
    let e = t.rotation_euler();
    assert!(vec3_approx(e, Vec3::new(0.3, -0.7, FRAC_PI_4)));
}

#[test]
fn transform_local_matrix_composes_trs() {
    let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    t.scale = Vec3::splat(2.0);
    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    t.update_local_matrix();

    let p = t.local_matrix().transform_point3(Vec3::X);
    // X scaled to 2, rotated about Y onto -Z, then translated
    assert!(vec3_approx(p, Vec3::new(1.0, 2.0, 1.0)));
}

// ============================================================================
// look_at_rotation
// ============================================================================

#[test]
fn look_at_object_points_positive_z_at_target() {
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let target = Vec3::new(-4.0, 0.5, 7.0);
    let q = look_at_rotation(eye, target, Vec3::Y, ForwardAxis::PositiveZ);
    let forward = q * Vec3::Z;
    assert!(vec3_approx(forward, (target - eye).normalize()));
}

#[test]
fn look_at_camera_points_negative_z_at_target() {
    let eye = Vec3::new(24.0, 12.0, 30.0);
    let q = look_at_rotation(eye, Vec3::ZERO, Vec3::Y, ForwardAxis::NegativeZ);
    let forward = q * Vec3::NEG_Z;
    assert!(vec3_approx(forward, (-eye).normalize()));
}

#[test]
fn look_at_keeps_up_in_vertical_plane() {
    let q = look_at_rotation(Vec3::ZERO, Vec3::new(3.0, 1.0, 4.0), Vec3::Y, ForwardAxis::PositiveZ);
    let right = q * Vec3::X;
    // Local X stays horizontal when up is world Y
    assert!(approx_eq(right.y, 0.0));
    assert!((q * Vec3::Y).y > 0.0);
}

#[test]
fn look_at_along_axis_is_identity() {
    let q = look_at_rotation(Vec3::ZERO, Vec3::Z * 10.0, Vec3::Y, ForwardAxis::PositiveZ);
    assert!(q.abs_diff_eq(Quat::IDENTITY, EPSILON) || q.abs_diff_eq(-Quat::IDENTITY, EPSILON));
}

// ============================================================================
// Hierarchy
// ============================================================================

fn chain() -> (Scene, [NodeHandle; 3]) {
    let mut scene = Scene::new();

    let mut root = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
    root.rotation = Quat::from_rotation_y(FRAC_PI_2);
    let root = scene.add_node(Node::new("root").with_transform(root));

    let mut mid = Transform::from_position(Vec3::new(0.0, 0.0, 2.0));
    mid.scale = Vec3::splat(3.0);
    let mid = scene
        .add_to_parent(Node::new("mid").with_transform(mid), root)
        .unwrap();

    let leaf = scene
        .add_to_parent(
            Node::new("leaf").with_transform(Transform::from_position(Vec3::X)),
            mid,
        )
        .unwrap();

    (scene, [root, mid, leaf])
}

#[test]
fn hierarchy_composes_parent_first() {
    let (mut scene, [_, _, leaf]) = chain();
    scene.update_matrix_world();

    // root yaw 90°: local +Z maps to world +X, local +X to world -Z
    // mid at (10,0,0) + 2·X = (12,0,0); leaf at mid + 3·(-Z)
    let expected = Vec3::new(12.0, 0.0, -3.0);
    let leaf_pos = scene.get_node(leaf).unwrap().transform.world_position();
    assert!(vec3_approx(leaf_pos, expected));
}

#[test]
fn chain_resolution_matches_full_walk() {
    let (mut scene, [_, _, leaf]) = chain();

    let resolved = scene.world_matrix(leaf).unwrap();
    scene.update_matrix_world();
    let walked = *scene.get_node(leaf).unwrap().world_matrix();

    assert!(resolved.abs_diff_eq(walked, EPSILON));
}

#[test]
fn chain_resolution_sees_unpropagated_edits() {
    let (mut scene, [root, _, leaf]) = chain();
    scene.update_matrix_world();

    scene.get_node_mut(root).unwrap().transform.position.y = 4.0;
    let pos = scene.world_position(leaf).unwrap();
    assert!(vec3_approx(pos, Vec3::new(12.0, 4.0, -3.0)));
}

#[test]
fn camera_view_follows_its_node() {
    let mut scene = Scene::new();
    let handle = scene.add_camera(
        Node::new("cam").with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 5.0))),
        Camera::new_perspective("cam", 45.0, 1.0, 0.1, 100.0),
    );

    scene.update();

    let camera = scene.camera_of(handle).unwrap();
    let origin_in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(vec3_approx(origin_in_view, Vec3::new(0.0, 0.0, -5.0)));
    assert!(
        camera
            .world_matrix()
            .abs_diff_eq(Affine3A::from_translation(Vec3::Z * 5.0), EPSILON)
    );
}
