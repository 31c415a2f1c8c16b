use crate::api::types::TextureId;
use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::sphere_instance::{SphereBuffer, SphereInstance};

/// Build the sphere instance buffer from active entities with mesh components.
pub fn build_sphere_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut SphereBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let MeshShape::Sphere { radius, width_segments, height_segments } = mesh.shape;
        buffer.push(SphereInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius,
            scale: entity.scale,
            texture: TextureId::encode(mesh.texture),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            width_segments: width_segments as f32,
            height_segments: height_segments as f32,
            _pad: 0.0,
        });
    }
}
