//! Rendering Contract
//!
//! The vignette does not rasterize anything itself. Drawing is delegated to a
//! [`Renderer`] that receives the scene with up-to-date world matrices and
//! the active camera with an up-to-date projection.
//!
//! Any `FnMut(&Scene, &Camera)` closure is a renderer, which keeps tests and
//! small hosts free of boilerplate.

use crate::scene::{Camera, Scene};

/// Turns a scene graph plus an active camera into pixels.
pub trait Renderer {
    /// Draws `scene` as seen from `camera`.
    ///
    /// Called once per frame, after viewport reconciliation and the
    /// world-matrix walk.
    fn render(&mut self, scene: &Scene, camera: &Camera);

    /// Notifies the renderer that the backing store changed size.
    fn resize(&mut self, _width: u32, _height: u32) {}
}

impl<F> Renderer for F
where
    F: FnMut(&Scene, &Camera),
{
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self(scene, camera);
    }
}

/// Renderer that records frames in the log instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct TraceRenderer {
    frames: u64,
    size: (u32, u32),
}

impl TraceRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Last backing-store size reported through [`Renderer::resize`].
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl Renderer for TraceRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.frames += 1;
        let eye = camera.world_matrix().translation;
        log::trace!(
            "frame {}: '{}' from ({:.2}, {:.2}, {:.2}), aspect {:.3}, {} meshes",
            self.frames,
            camera.label,
            eye.x,
            eye.y,
            eye.z,
            camera.aspect,
            scene.meshes.len()
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        log::debug!("render target resized to {width}x{height}");
    }
}
