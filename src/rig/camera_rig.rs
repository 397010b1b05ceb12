use crate::animation::clock::AnimationState;
use crate::errors::{Result, VignetteError};
use crate::scene::{NodeHandle, Scene};

/// Ordered set of cameras plus the time-sliced rule choosing the active one.
///
/// Camera `i` is active while `floor(cycle_rate * s) mod len == i`, so with
/// four cameras and a rate of 0.25 each is shown for four seconds and the
/// cycle repeats every sixteen.
#[derive(Debug, Clone)]
pub struct CameraRig {
    cameras: Vec<NodeHandle>,
    cycle_rate: f32,
}

impl CameraRig {
    pub fn new(cameras: Vec<NodeHandle>, cycle_rate: f32) -> Result<Self> {
        if cameras.is_empty() {
            return Err(VignetteError::InvalidSettings(
                "camera rig needs at least one camera".into(),
            ));
        }
        if !(cycle_rate.is_finite() && cycle_rate > 0.0) {
            return Err(VignetteError::InvalidSettings(format!(
                "camera cycle rate must be positive, got {cycle_rate}"
            )));
        }
        Ok(Self { cameras, cycle_rate })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    #[must_use]
    pub fn cameras(&self) -> &[NodeHandle] {
        &self.cameras
    }

    /// Seconds between two returns to the same camera.
    #[must_use]
    pub fn period(&self) -> f32 {
        self.cameras.len() as f32 / self.cycle_rate
    }

    #[must_use]
    pub fn active_index(&self, state: AnimationState) -> usize {
        let slot = (f64::from(self.cycle_rate) * state.elapsed_seconds).floor() as i64;
        slot.rem_euclid(self.cameras.len() as i64) as usize
    }

    #[must_use]
    pub fn active(&self, state: AnimationState) -> NodeHandle {
        self.cameras[self.active_index(state)]
    }

    /// Label of the active camera.
    #[must_use]
    pub fn active_label<'a>(&self, scene: &'a Scene, state: AnimationState) -> Option<&'a str> {
        scene
            .camera_of(self.active(state))
            .map(|camera| camera.label.as_ref())
    }

    /// Sets every camera's aspect ratio to `width / height`.
    ///
    /// A zero-sized viewport leaves the cameras untouched. Returns whether an
    /// aspect was applied.
    pub fn reconcile_aspect(&self, scene: &mut Scene, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let aspect = width as f32 / height as f32;
        for &node in &self.cameras {
            if let Some(camera) = scene.camera_of_mut(node) {
                camera.set_aspect(aspect);
            }
        }
        true
    }
}
