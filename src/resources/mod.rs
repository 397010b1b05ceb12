//! Renderer-facing resource descriptors.
//!
//! Plain data describing what each mesh node looks like. Nothing here
//! allocates GPU resources; an external [`Renderer`](crate::render::Renderer)
//! turns these into draw calls.

pub mod color;
pub mod mesh;
pub mod primitives;

pub use color::Color;
pub use mesh::{Material, Mesh};
pub use primitives::Primitive;
