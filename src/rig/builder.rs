//! Rig Builder
//!
//! Constructs the static hierarchy once:
//!
//! ```text
//! vehicle ─ body ─┬─ wheel ×6
//!                 ├─ dome
//!                 ├─ turret pivot ─ turret ─ turret camera
//!                 └─ vehicle camera
//! target orbit ─ elevation ─ bob ─┬─ target
//!                                 └─ target camera pivot ─ target camera
//! detached camera
//! ground, key light, fill light
//! ```

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Quat, Vec3};

use crate::config::VignetteSettings;
use crate::errors::Result;
use crate::resources::{Color, Material, Mesh, Primitive};
use crate::scene::{Camera, Light, Node, NodeHandle, Scene, ShadowConfig, Transform};

pub const DETACHED_CAMERA_LABEL: &str = "detached camera";
pub const TURRET_CAMERA_LABEL: &str = "on turret looking at target";
pub const TARGET_CAMERA_LABEL: &str = "on target looking at tank";
pub const VEHICLE_CAMERA_LABEL: &str = "above back of tank";

/// Handles of every node the animation driver and the camera rig touch.
#[derive(Debug, Clone)]
pub struct Rig {
    pub vehicle: NodeHandle,
    pub body: NodeHandle,
    pub wheels: [NodeHandle; 6],
    pub dome: NodeHandle,
    pub turret_pivot: NodeHandle,
    pub turret: NodeHandle,
    pub turret_camera: NodeHandle,
    pub vehicle_camera: NodeHandle,

    pub target_orbit: NodeHandle,
    pub target_elevation: NodeHandle,
    pub target_bob: NodeHandle,
    pub target_mesh: NodeHandle,
    pub target_camera_pivot: NodeHandle,
    pub target_camera: NodeHandle,

    pub detached_camera: NodeHandle,

    pub ground: NodeHandle,
    pub lights: [NodeHandle; 2],
}

impl Rig {
    /// Cameras in cycling order: detached, turret, target, vehicle.
    #[must_use]
    pub fn camera_cycle(&self) -> [NodeHandle; 4] {
        [
            self.detached_camera,
            self.turret_camera,
            self.target_camera,
            self.vehicle_camera,
        ]
    }
}

fn yawed(position: Vec3, yaw: f32) -> Transform {
    let mut transform = Transform::from_position(position);
    transform.rotation = Quat::from_rotation_y(yaw);
    transform
}

/// Builds the rig into `scene` and returns the handles of its nodes.
pub fn build_rig(scene: &mut Scene, settings: &VignetteSettings) -> Result<Rig> {
    let d = &settings.dimensions;
    let cams = &settings.cameras;
    let aspect = cams.initial_aspect;
    let camera = |label: &'static str, fov: f32| Camera::new_perspective(label, fov, aspect, cams.near, cams.far);

    // === Static surroundings ===
    let mut ground_transform = Transform::new();
    ground_transform.rotation = Quat::from_rotation_x(-FRAC_PI_2);
    let ground = scene.add_mesh(
        Node::new("ground").with_transform(ground_transform),
        Mesh::new(
            Primitive::Plane {
                width: d.ground_size,
                height: d.ground_size,
            },
            Material::new(Color::from_hex(0xcc_8866)),
        )
        .receiving_shadow(),
    );

    let key_light = scene.add_light(
        Node::new("key light").with_transform(Transform::from_position(Vec3::new(0.0, 20.0, 0.0))),
        Light::new_directional(Vec3::ONE, 3.0).with_shadow(ShadowConfig::default()),
    );
    let fill_light = scene.add_light(
        Node::new("fill light").with_transform(Transform::from_position(Vec3::Y)),
        Light::new_directional(Vec3::ONE, 3.0),
    );

    // === Vehicle ===
    let body_material = Material::new(Color::from_hex(0x66_88aa));
    let vehicle = scene.add_node(Node::new("vehicle"));
    let body = scene.add_mesh_to_parent(
        Node::new("body"),
        Mesh::new(
            Primitive::Box {
                width: d.vehicle_width,
                height: d.vehicle_height,
                depth: d.vehicle_length,
            },
            body_material.clone(),
        ),
        vehicle,
    )?;

    let vehicle_camera = scene.add_camera_to_parent(
        Node::new("vehicle camera").with_transform(yawed(Vec3::new(0.0, 3.0, -6.0), PI)),
        camera(VEHICLE_CAMERA_LABEL, cams.vehicle_fov),
        body,
    )?;

    let wheel_mesh = Mesh::new(
        Primitive::Cylinder {
            radius: d.wheel_radius,
            height: d.wheel_thickness,
            segments: d.wheel_segments,
        },
        Material::new(Color::from_hex(0x88_8888)),
    )
    .casting_shadow();
    let wheel_positions = d.wheel_positions();
    let mut wheels = [NodeHandle::default(); 6];
    for (slot, position) in wheels.iter_mut().zip(wheel_positions) {
        let mut transform = Transform::from_position(position);
        transform.set_rotation_euler(0.0, 0.0, FRAC_PI_2);
        *slot = scene.add_mesh_to_parent(
            Node::new("wheel").with_transform(transform),
            wheel_mesh.clone(),
            body,
        )?;
    }

    let dome = scene.add_mesh_to_parent(
        Node::new("dome").with_transform(Transform::from_position(Vec3::new(0.0, d.vehicle_height / 2.0, 0.0))),
        Mesh::new(
            Primitive::Sphere {
                radius: d.dome_radius,
                width_segments: 12,
                height_segments: 12,
                theta_length: FRAC_PI_2,
            },
            body_material.clone(),
        )
        .casting_shadow(),
        body,
    )?;

    let mut pivot_transform = Transform::from_position(Vec3::new(0.0, d.dome_radius / 4.0, 0.0));
    pivot_transform.scale = Vec3::splat(d.turret_scale);
    let turret_pivot = scene.add_to_parent(Node::new("turret pivot").with_transform(pivot_transform), body)?;

    let turret_length = d.turret_length();
    let turret = scene.add_mesh_to_parent(
        Node::new("turret").with_transform(Transform::from_position(Vec3::new(0.0, 0.0, turret_length / 2.0))),
        Mesh::new(
            Primitive::Box {
                width: 0.1,
                height: 0.1,
                depth: turret_length,
            },
            body_material,
        )
        .casting_shadow(),
        turret_pivot,
    )?;

    let turret_camera = scene.add_camera_to_parent(
        Node::new("turret camera").with_transform(Transform::from_position(Vec3::new(0.0, 0.15, 0.0))),
        camera(TURRET_CAMERA_LABEL, cams.default_fov),
        turret,
    )?;

    // === Target ===
    let target_orbit = scene.add_node(Node::new("target orbit"));
    let target_elevation = scene.add_to_parent(
        Node::new("target elevation").with_transform(Transform::from_position(d.target_elevation())),
        target_orbit,
    )?;
    let target_bob = scene.add_to_parent(Node::new("target bob"), target_elevation)?;
    let target_mesh = scene.add_mesh_to_parent(
        Node::new("target"),
        Mesh::new(
            Primitive::sphere(d.target_radius, 6, 3),
            Material::new(Color::from_hex(0x00_ff00)).with_flat_shading(),
        )
        .casting_shadow(),
        target_bob,
    )?;

    let target_camera_pivot = scene.add_to_parent(Node::new("target camera pivot"), target_bob)?;
    let target_camera = scene.add_camera_to_parent(
        Node::new("target camera").with_transform(yawed(Vec3::new(0.0, 1.0, -2.0), PI)),
        camera(TARGET_CAMERA_LABEL, cams.default_fov),
        target_camera_pivot,
    )?;

    // === Detached camera: aimed once, never animated ===
    let detached_camera = scene.add_camera(
        Node::new("detached camera").with_transform(Transform::from_position(cams.detached_position)),
        camera(DETACHED_CAMERA_LABEL, cams.default_fov),
    );
    scene.look_at(detached_camera, Vec3::ZERO, Vec3::Y);

    scene.update();

    log::info!(
        "Rig built: {} nodes, {} cameras, {} lights",
        scene.node_count(),
        scene.cameras.len(),
        scene.lights.len()
    );

    Ok(Rig {
        vehicle,
        body,
        wheels,
        dome,
        turret_pivot,
        turret,
        turret_camera,
        vehicle_camera,
        target_orbit,
        target_elevation,
        target_bob,
        target_mesh,
        target_camera_pivot,
        target_camera,
        detached_camera,
        ground,
        lights: [key_light, fill_light],
    })
}
