use crate::api::types::TextureId;

/// Base RGB color, multiplied with the texture by the host's standard material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Mesh primitive. The host tessellates it; segment counts are forwarded as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl MeshShape {
    /// Radius of the shape's bounding sphere before entity scale.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            MeshShape::Sphere { radius, .. } => radius,
        }
    }
}

/// Renderable mesh attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    pub texture: Option<TextureId>,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self::sphere(1.0, 32)
    }
}

impl MeshComponent {
    /// A UV sphere with the same segment count in both directions.
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self {
            shape: MeshShape::Sphere {
                radius,
                width_segments: segments,
                height_segments: segments,
            },
            color: MeshColor::WHITE,
            texture: None,
        }
    }

    pub fn with_color(mut self, color: MeshColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}
