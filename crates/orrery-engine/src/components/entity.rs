use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;

/// Fat Entity: a single struct with optional components.
/// Scale is uniform; the scene only ever grows or shrinks bodies evenly.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Uniform scale factor applied on top of the mesh size.
    pub scale: f32,
    /// Mesh component (optional: entities without a mesh are invisible).
    pub mesh: Option<MeshComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            scale: 1.0,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// World-space radius of the mesh after scaling, if the entity has one.
    pub fn world_radius(&self) -> Option<f32> {
        self.mesh
            .as_ref()
            .map(|m| m.shape.bounding_radius() * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_radius_follows_scale() {
        let e = Entity::new(EntityId(1))
            .with_mesh(MeshComponent::sphere(1.5, 16))
            .with_scale(3.0);
        assert!((e.world_radius().unwrap() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn no_mesh_no_radius() {
        assert!(Entity::new(EntityId(1)).world_radius().is_none());
    }
}
