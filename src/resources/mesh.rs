use crate::resources::color::Color;
use crate::resources::primitives::Primitive;

/// Phong-style surface description.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub flat_shading: bool,
}

impl Material {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            flat_shading: false,
        }
    }

    #[must_use]
    pub fn with_flat_shading(mut self) -> Self {
        self.flat_shading = true;
        self
    }
}

/// Mesh component: a primitive shape plus its material.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub primitive: Primitive,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(primitive: Primitive, material: Material) -> Self {
        Self {
            primitive,
            material,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    #[must_use]
    pub fn casting_shadow(mut self) -> Self {
        self.cast_shadow = true;
        self
    }

    #[must_use]
    pub fn receiving_shadow(mut self) -> Self {
        self.receive_shadow = true;
        self
    }
}
