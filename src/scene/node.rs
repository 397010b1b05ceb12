use std::borrow::Cow;

use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{CameraKey, LightKey, MeshKey, NodeHandle};

/// A scene node.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child links:
/// - `parent`: handle of the parent node (`None` for roots)
/// - `children`: ordered child handles
///
/// Links are written once when a node is inserted into the [`Scene`](crate::scene::Scene)
/// and never change afterwards, so the hierarchy cannot form a cycle.
///
/// # Components
///
/// Cameras, lights and meshes live in the scene's pools; a node refers to
/// at most one of each by key.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: Cow<'static, str>,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,

    pub(crate) camera: Option<CameraKey>,
    pub(crate) light: Option<LightKey>,
    pub(crate) mesh: Option<MeshKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            camera: None,
            light: None,
            mesh: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> Option<CameraKey> {
        self.camera
    }

    #[inline]
    #[must_use]
    pub fn light(&self) -> Option<LightKey> {
        self.light
    }

    #[inline]
    #[must_use]
    pub fn mesh(&self) -> Option<MeshKey> {
        self.mesh
    }

    /// Returns the world matrix as of the last hierarchy update.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
