use glam::{Affine3A, Quat, Vec3};
use slotmap::SlotMap;

use crate::errors::{Result, VignetteError};
use crate::resources::mesh::Mesh;
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform::{ForwardAxis, look_at_rotation};
use crate::scene::transform_system;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};

/// Scene graph container.
///
/// Owns the node arena and the component pools. Nodes are attached to their
/// parent at insertion time only; there is no re-parenting, so the hierarchy
/// is a forest fixed after construction.
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub(crate) root_nodes: Vec<NodeHandle>,

    pub cameras: SlotMap<CameraKey, Camera>,
    pub lights: SlotMap<LightKey, Light>,
    pub meshes: SlotMap<MeshKey, Mesh>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            cameras: SlotMap::with_key(),
            lights: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adds a root node.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds `node` as the last child of `parent`.
    pub fn add_to_parent(&mut self, mut node: Node, parent: NodeHandle) -> Result<NodeHandle> {
        if !self.nodes.contains_key(parent) {
            return Err(VignetteError::NodeNotFound(format!(
                "parent of '{}' is not in the scene",
                node.name
            )));
        }

        node.parent = Some(parent);
        let handle = self.nodes.insert(node);
        self.nodes[parent].children.push(handle);
        Ok(handle)
    }

    /// Adds a root node carrying `camera`.
    pub fn add_camera(&mut self, mut node: Node, camera: Camera) -> NodeHandle {
        node.camera = Some(self.cameras.insert(camera));
        self.add_node(node)
    }

    pub fn add_camera_to_parent(
        &mut self,
        node: Node,
        camera: Camera,
        parent: NodeHandle,
    ) -> Result<NodeHandle> {
        let handle = self.add_to_parent(node, parent)?;
        self.nodes[handle].camera = Some(self.cameras.insert(camera));
        Ok(handle)
    }

    /// Adds a root node carrying `light`.
    pub fn add_light(&mut self, mut node: Node, light: Light) -> NodeHandle {
        node.light = Some(self.lights.insert(light));
        self.add_node(node)
    }

    /// Adds a root node carrying `mesh`.
    pub fn add_mesh(&mut self, mut node: Node, mesh: Mesh) -> NodeHandle {
        node.mesh = Some(self.meshes.insert(mesh));
        self.add_node(node)
    }

    pub fn add_mesh_to_parent(
        &mut self,
        node: Node,
        mesh: Mesh,
        parent: NodeHandle,
    ) -> Result<NodeHandle> {
        let handle = self.add_to_parent(node, parent)?;
        self.nodes[handle].mesh = Some(self.meshes.insert(mesh));
        Ok(handle)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    /// Mutable access for editing a node's TRS.
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn camera_of(&self, handle: NodeHandle) -> Option<&Camera> {
        let key = self.nodes.get(handle)?.camera?;
        self.cameras.get(key)
    }

    pub fn camera_of_mut(&mut self, handle: NodeHandle) -> Option<&mut Camera> {
        let key = self.nodes.get(handle)?.camera?;
        self.cameras.get_mut(key)
    }

    #[must_use]
    pub fn mesh_of(&self, handle: NodeHandle) -> Option<&Mesh> {
        let key = self.nodes.get(handle)?.mesh?;
        self.meshes.get(key)
    }

    pub fn mesh_of_mut(&mut self, handle: NodeHandle) -> Option<&mut Mesh> {
        let key = self.nodes.get(handle)?.mesh?;
        self.meshes.get_mut(key)
    }

    /// Current world matrix of `handle`, composed from its ancestor chain.
    ///
    /// Reflects every local edit made so far, even before the frame's
    /// [`update_matrix_world`](Self::update_matrix_world).
    pub fn world_matrix(&mut self, handle: NodeHandle) -> Option<Affine3A> {
        transform_system::resolve_world_chain(&mut self.nodes, handle)
    }

    /// Current world-space position of `handle`.
    pub fn world_position(&mut self, handle: NodeHandle) -> Option<Vec3> {
        self.world_matrix(handle).map(|m| m.translation.into())
    }

    // ========================================================================
    // Orientation
    // ========================================================================

    /// Rotates `handle` so that its forward axis points at the world-space
    /// point `target`.
    ///
    /// Cameras aim their `-Z` axis, every other node its `+Z` axis. The
    /// orientation is solved in world space and converted into the parent's
    /// frame, so it holds regardless of how the ancestors are rotated.
    /// Only the node's rotation is written.
    ///
    /// Returns `false` if the handle is not in the scene.
    pub fn look_at(&mut self, handle: NodeHandle, target: Vec3, up: Vec3) -> bool {
        let Some(world) = transform_system::resolve_world_chain(&mut self.nodes, handle) else {
            return false;
        };
        let Some(node) = self.nodes.get(handle) else {
            return false;
        };

        let axis = if node.camera.is_some() {
            ForwardAxis::NegativeZ
        } else {
            ForwardAxis::PositiveZ
        };

        let parent_rotation = node
            .parent
            .and_then(|p| self.nodes.get(p))
            .map_or(Quat::IDENTITY, |p| {
                p.transform.world_matrix.to_scale_rotation_translation().1
            });

        let world_rotation = look_at_rotation(world.translation.into(), target, up, axis);
        let local_rotation = (parent_rotation.inverse() * world_rotation).normalize();

        if let Some(node) = self.nodes.get_mut(handle) {
            node.transform.rotation = local_rotation;
        }
        true
    }

    // ========================================================================
    // Per-frame update
    // ========================================================================

    /// Propagates world matrices through the whole hierarchy.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &mut self.cameras, &self.root_nodes);
    }

    /// Recomputes the projection of every camera whose aspect changed.
    pub fn sync_camera_projections(&mut self) {
        for (_, camera) in &mut self.cameras {
            if camera.is_projection_dirty() {
                camera.update_projection_matrix();
            }
        }
    }

    /// Brings all derived matrices up to date. Call once per frame before drawing.
    pub fn update(&mut self) {
        self.update_matrix_world();
        self.sync_camera_projections();
    }
}
