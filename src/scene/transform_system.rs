//! Transform System
//!
//! World matrix propagation for the scene graph, decoupled from [`Scene`](crate::scene::Scene)
//! so that it only borrows the node arena and the camera pool.
//!
//! Two entry points:
//! - [`update_hierarchy`]: full top-down walk (parents before children) run
//!   once per frame before drawing. Local matrices are dirty-checked and a
//!   world matrix is only recomposed when its local matrix or an ancestor
//!   changed.
//! - [`resolve_world_chain`]: on-demand resolution of one node's world
//!   matrix by composing its ancestor chain. Used for mid-frame queries
//!   (world positions, look-at) after local transforms were edited.

use glam::Affine3A;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{CameraKey, NodeHandle};

/// Updates the world matrices of every node reachable from `roots`.
///
/// Uses an explicit stack instead of recursion. Camera view matrices are
/// refreshed alongside their node.
pub fn update_hierarchy(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SlotMap<CameraKey, Camera>,
    roots: &[NodeHandle],
) {
    // (node, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_changed = local_changed || parent_changed;

        if world_changed {
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);

            if let Some(camera) = node.camera.and_then(|key| cameras.get_mut(key)) {
                camera.update_view_projection(&world);
            }
        }

        let world = node.transform.world_matrix;
        for &child in node.children.iter().rev() {
            stack.push((child, world, world_changed));
        }
    }
}

/// Resolves the world matrix of `handle` by composing the local transforms
/// of all its ancestors, root first.
///
/// Every node on the chain gets its cached world matrix refreshed. The
/// dirty-check state is left untouched, so the next [`update_hierarchy`]
/// still propagates the same edits to the rest of the tree.
///
/// Returns `None` if `handle` or one of its ancestors is not in the arena.
pub fn resolve_world_chain(
    nodes: &mut SlotMap<NodeHandle, Node>,
    handle: NodeHandle,
) -> Option<Affine3A> {
    let mut chain: SmallVec<[NodeHandle; 8]> = SmallVec::new();
    let mut cursor = Some(handle);
    while let Some(current) = cursor {
        chain.push(current);
        cursor = nodes.get(current)?.parent;
    }

    let mut world = Affine3A::IDENTITY;
    for &current in chain.iter().rev() {
        let node = nodes.get_mut(current)?;
        world = world * node.transform.compose_local();
        node.transform.set_world_matrix(world);
    }

    Some(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_hierarchy_update() {
        let mut nodes: SlotMap<NodeHandle, Node> = SlotMap::with_key();
        let mut cameras: SlotMap<CameraKey, Camera> = SlotMap::with_key();

        let mut parent = Node::new("parent");
        parent.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let parent_handle = nodes.insert(parent);

        let mut child = Node::new("child");
        child.transform.position = Vec3::new(0.0, 1.0, 0.0);
        child.parent = Some(parent_handle);
        let child_handle = nodes.insert(child);

        nodes[parent_handle].children.push(child_handle);

        update_hierarchy(&mut nodes, &mut cameras, &[parent_handle]);

        let child_world_pos = nodes[child_handle].transform.world_position();
        assert!((child_world_pos - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn chain_resolution_does_not_swallow_edits() {
        let mut nodes: SlotMap<NodeHandle, Node> = SlotMap::with_key();
        let mut cameras: SlotMap<CameraKey, Camera> = SlotMap::with_key();

        let root = nodes.insert(Node::new("root"));
        let mut a = Node::new("a");
        a.parent = Some(root);
        let a = nodes.insert(a);
        let mut b = Node::new("b");
        b.parent = Some(root);
        b.transform.position = Vec3::Z;
        let b = nodes.insert(b);
        nodes[root].children.extend([a, b]);

        update_hierarchy(&mut nodes, &mut cameras, &[root]);

        // Move the root, resolve only `a`, then run the full walk: `b` must follow.
        nodes[root].transform.position = Vec3::X * 3.0;
        let a_world = resolve_world_chain(&mut nodes, a).unwrap();
        assert!((Vec3::from(a_world.translation) - Vec3::X * 3.0).length() < 1e-5);

        update_hierarchy(&mut nodes, &mut cameras, &[root]);
        let b_pos = nodes[b].transform.world_position();
        assert!((b_pos - Vec3::new(3.0, 0.0, 1.0)).length() < 1e-5);
    }
}
