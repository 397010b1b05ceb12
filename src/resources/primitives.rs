/// Parametric shape of a mesh node. Dimensions are in local units; the
/// renderer tessellates them.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box centred on the origin.
    Box { width: f32, height: f32, depth: f32 },
    /// Cylinder along the local Y axis.
    Cylinder {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// Sphere, optionally truncated in latitude (`theta_length < π` gives a dome).
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
        theta_length: f32,
    },
    /// Plane in the local XY plane.
    Plane { width: f32, height: f32 },
}

impl Primitive {
    #[must_use]
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
            theta_length: std::f32::consts::PI,
        }
    }
}
