//! Scene Graph
//!
//! Arena-backed hierarchy of parented nodes:
//! - [`Node`]: hierarchy links, a [`Transform`] and optional component keys
//! - [`Transform`]: local position/rotation/scale with cached matrices
//! - [`Scene`]: the node arena plus camera, light and mesh pools
//! - [`transform_system`]: parent-before-child world matrix propagation
//! - [`look_at_rotation`]: pure orientation-toward-a-point helper

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use light::{Light, ShadowConfig};
pub use node::Node;
pub use scene::Scene;
pub use transform::{ForwardAxis, Transform, look_at_rotation};

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct CameraKey;
    pub struct LightKey;
    pub struct MeshKey;
}
