//! Engine Core Module
//!
//! [`Engine`] owns the scene graph, the rig built into it, the camera cycle
//! and the animation driver. It has no window or timer of its own: a host
//! (the winit runner, the browser runner, a test, a benchmark) feeds it one
//! [`AnimationState`] per display refresh through [`Engine::frame`].
//!
//! # Frame order
//!
//! 1. Animation driver writes every moving node's local transform
//! 2. Viewport reconciliation: backing store and camera aspects
//! 3. Camera selection; the active label goes to the status display
//! 4. World-matrix walk and dirty projection recomputation
//! 5. Render request for the active camera
//!
//! Steps 2 and 4 both complete before step 5, so a camera never draws with
//! a stale aspect ratio after a detected resize.
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette::{Engine, VignetteSettings};
//! use vignette::app::FixedViewport;
//! use vignette::animation::AnimationState;
//! use vignette::render::TraceRenderer;
//!
//! let mut engine = Engine::new(VignetteSettings::default())?;
//! let mut viewport = FixedViewport::new(1280, 720);
//! let mut renderer = TraceRenderer::new();
//! engine.frame(AnimationState::at(0.0), &mut viewport, None, &mut renderer);
//! ```

use crate::animation::{AnimationDriver, AnimationState, Path};
use crate::app::{StatusDisplay, Viewport};
use crate::config::VignetteSettings;
use crate::errors::Result;
use crate::render::Renderer;
use crate::rig::{CameraRig, Rig, build_rig};
use crate::scene::Scene;

/// The vignette instance driven by a host's frame callback.
pub struct Engine {
    scene: Scene,
    rig: Rig,
    cameras: CameraRig,
    driver: AnimationDriver,

    frame_count: u64,
    last_active: Option<usize>,
}

impl Engine {
    /// Validates `settings`, builds the path and the rig.
    ///
    /// Every fallible step happens here; [`frame`](Self::frame) is total.
    pub fn new(settings: VignetteSettings) -> Result<Self> {
        settings.validate()?;

        let path = Path::new(&settings.path)?;
        let mut scene = Scene::new();
        let rig = build_rig(&mut scene, &settings)?;
        let cameras = CameraRig::new(
            rig.camera_cycle().to_vec(),
            settings.choreography.camera_cycle_rate,
        )?;

        log::info!(
            "Engine ready: {} path vertices, {} cameras cycling every {:.1}s",
            path.control_points().len(),
            cameras.len(),
            cameras.period()
        );

        Ok(Self {
            scene,
            rig,
            cameras,
            driver: AnimationDriver::new(settings.choreography, path),
            frame_count: 0,
            last_active: None,
        })
    }

    #[inline]
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[inline]
    #[must_use]
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    #[inline]
    #[must_use]
    pub fn camera_rig(&self) -> &CameraRig {
        &self.cameras
    }

    #[inline]
    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Returns the total number of frames run since startup.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Applies the choreography at `state` without drawing.
    pub fn animate(&mut self, state: AnimationState) {
        self.driver.animate(&mut self.scene, &self.rig, state);
    }

    /// Matches the backing store to the displayed size and updates every
    /// camera's aspect ratio.
    ///
    /// Returns `true` if the backing store was resized. A zero-sized display
    /// still resizes the backing store but leaves the aspects alone.
    pub fn reconcile_viewport(&mut self, viewport: &mut dyn Viewport, renderer: &mut dyn Renderer) -> bool {
        let display = viewport.display_size();
        if display == viewport.backing_size() {
            return false;
        }

        let (width, height) = display;
        viewport.resize_backing(width, height);
        renderer.resize(width, height);

        if self.cameras.reconcile_aspect(&mut self.scene, width, height) {
            log::debug!(
                "Viewport resized to {width}x{height}, aspect {:.3}",
                width as f32 / height as f32
            );
        } else {
            log::debug!("Viewport resized to {width}x{height}, aspect left unchanged");
        }
        true
    }

    /// Runs one frame at `state` and asks `renderer` to draw it.
    pub fn frame(
        &mut self,
        state: AnimationState,
        viewport: &mut dyn Viewport,
        status: Option<&mut dyn StatusDisplay>,
        renderer: &mut dyn Renderer,
    ) -> FrameState {
        self.animate(state);
        let resized = self.reconcile_viewport(viewport, renderer);

        let active_index = self.cameras.active_index(state);
        let active = self.cameras.active(state);
        if self.last_active != Some(active_index) {
            log::debug!(
                "Switched to camera {active_index} '{}' at {:.2}s",
                self.cameras.active_label(&self.scene, state).unwrap_or_default(),
                state.elapsed_seconds
            );
            self.last_active = Some(active_index);
        }
        if let Some(status) = status
            && let Some(label) = self.cameras.active_label(&self.scene, state)
        {
            status.set_text(label);
        }

        self.scene.update();

        if let Some(camera) = self.scene.camera_of(active) {
            renderer.render(&self.scene, camera);
        }

        self.frame_count += 1;
        FrameState {
            elapsed_seconds: state.elapsed_seconds,
            frame_count: self.frame_count,
            active_camera: active_index,
            resized,
        }
    }
}

/// Per-frame summary returned by [`Engine::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Elapsed animation time the frame was run at (in seconds).
    pub elapsed_seconds: f64,
    /// Total number of frames run since startup, this one included.
    pub frame_count: u64,
    /// Index of the camera that drew the frame.
    pub active_camera: usize,
    /// Whether the backing store was resized during the frame.
    pub resized: bool,
}
