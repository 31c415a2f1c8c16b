/// Static planet table. Indices line up across all arrays.

use glam::Vec3;

pub const PLANET_COUNT: usize = 5;

/// Sphere radius shared by every planet.
pub const PLANET_RADIUS: f32 = 1.5;
/// Width and height segments of the sphere mesh.
pub const PLANET_SEGMENTS: u32 = 64;

pub const POSITIONS: [Vec3; PLANET_COUNT] = [
    Vec3::new(-7.0, 0.0, -3.0),
    Vec3::new(-4.9, 0.0, -7.9),
    Vec3::new(0.0, 0.0, -11.0),
    Vec3::new(4.9, 0.0, -7.9),
    Vec3::new(7.0, 0.0, -3.0),
];

pub const TEXTURES: [&str; PLANET_COUNT] = [
    "texture/texture_orange.jpg",
    "texture/texture_jaune.jpg",
    "texture/texture_sale.jpg",
    "texture/texture_bleu.jpg",
    "texture/texture_rouge.jpg",
];

pub const LABELS: [&str; PLANET_COUNT] = [
    "Planète Orange",
    "Planète Jaune",
    "Planète Sale",
    "Planète Bleue",
    "Planète Rouge",
];

/// Texture registry key for a planet (the manifest overrides paths by this name).
pub fn texture_name(index: usize) -> String {
    format!("planet-{}", index)
}

pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_line_up() {
        assert_eq!(POSITIONS.len(), TEXTURES.len());
        assert_eq!(TEXTURES.len(), LABELS.len());
    }

    #[test]
    fn arc_is_symmetric() {
        for i in 0..PLANET_COUNT {
            let mirror = POSITIONS[PLANET_COUNT - 1 - i];
            assert_eq!(POSITIONS[i].x, -mirror.x);
            assert_eq!(POSITIONS[i].z, mirror.z);
        }
    }

    #[test]
    fn labels_by_index() {
        assert_eq!(label(2), Some("Planète Sale"));
        assert_eq!(label(PLANET_COUNT), None);
    }
}
