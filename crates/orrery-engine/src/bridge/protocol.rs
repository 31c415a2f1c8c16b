/// Host buffer layout.
/// Must stay in sync with the host's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 12 floats]
/// [Spheres: max_spheres × 12 floats]
/// [Lights: max_lights × 8 floats]
/// [Stars: max_stars × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_SPHERES: usize = 3;
pub const HEADER_SPHERE_COUNT: usize = 4;
pub const HEADER_MAX_LIGHTS: usize = 5;
pub const HEADER_LIGHT_COUNT: usize = 6;
pub const HEADER_MAX_STARS: usize = 7;
pub const HEADER_STAR_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_AMBIENT_INTENSITY: usize = 11;
/// 1.0 while user camera input is honoured, 0.0 while it is locked.
pub const HEADER_CONTROLS_ENABLED: usize = 12;
pub const HEADER_STAR_SPEED: usize = 13;
pub const HEADER_STAR_FADE: usize = 14;
pub const HEADER_TEXTURE_COUNT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: eye, target, up, fov (degrees), near, far.
pub const CAMERA_FLOATS: usize = 12;

/// Floats per sphere instance (wire format, fixed).
pub const SPHERE_FLOATS: usize = 12;

/// Floats per point light: x, y, z, r, g, b, intensity, decay.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per star: x, y, z, r, g, b, size, pad.
pub const STAR_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Default light capacity.
pub const DEFAULT_MAX_LIGHTS: usize = 16;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_spheres: usize,
    pub max_lights: usize,
    pub max_stars: usize,
    pub max_events: usize,

    pub sphere_data_floats: usize,
    pub light_data_floats: usize,
    pub star_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where each section begins.
    pub camera_data_offset: usize,
    pub sphere_data_offset: usize,
    pub light_data_offset: usize,
    pub star_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_spheres: usize, max_lights: usize, max_stars: usize, max_events: usize) -> Self {
        let sphere_data_floats = max_spheres * SPHERE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_data_offset = HEADER_FLOATS;
        let sphere_data_offset = camera_data_offset + CAMERA_FLOATS;
        let light_data_offset = sphere_data_offset + sphere_data_floats;
        let star_data_offset = light_data_offset + light_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_spheres,
            max_lights,
            max_stars,
            max_events,
            sphere_data_floats,
            light_data_floats,
            star_data_floats,
            event_data_floats,
            camera_data_offset,
            sphere_data_offset,
            light_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_spheres,
            config.max_lights,
            config.max_stars,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::CameraUniform;
    use crate::renderer::sphere_instance::SphereInstance;
    use crate::systems::starfield::Star;
    use crate::api::types::GameEvent;

    #[test]
    fn wire_structs_match_float_counts() {
        assert_eq!(CameraUniform::FLOATS, CAMERA_FLOATS);
        assert_eq!(SphereInstance::FLOATS, SPHERE_FLOATS);
        assert_eq!(std::mem::size_of::<Star>(), STAR_FLOATS * 4);
        assert_eq!(GameEvent::FLOATS, EVENT_FLOATS);
    }

    #[test]
    fn from_default_config() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_spheres, config.max_spheres);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);
        assert_eq!(layout.max_stars, config.max_stars);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(8, 8, 5000, 16);
        let expected_total = HEADER_FLOATS + CAMERA_FLOATS + 8 * 12 + 8 * 8 + 5000 * 8 + 16 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.star_data_floats, 40_000);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(5, 6, 100, 20);
        assert_eq!(layout.camera_data_offset, HEADER_FLOATS);
        assert_eq!(layout.sphere_data_offset, layout.camera_data_offset + CAMERA_FLOATS);
        assert_eq!(layout.light_data_offset, layout.sphere_data_offset + layout.sphere_data_floats);
        assert_eq!(layout.star_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn header_indices_fit() {
        assert!(HEADER_TEXTURE_COUNT < HEADER_FLOATS);
    }
}
