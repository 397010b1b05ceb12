use glam::Vec3;

/// Orthographic shadow volume of a directional light.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub bias: f32,
    pub map_size: u32,
    /// Half-extent of the orthographic shadow camera.
    pub extent: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: 0.001,
            map_size: 2048,
            extent: 50.0,
            near: 1.0,
            far: 50.0,
        }
    }
}

/// Directional light component. Direction follows the owning node, shining
/// from the node's world position toward the world origin.
#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            shadow: None,
        }
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: ShadowConfig) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[inline]
    #[must_use]
    pub fn casts_shadow(&self) -> bool {
        self.shadow.is_some()
    }
}
