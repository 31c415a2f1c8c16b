use crate::core::scene::Scene;
use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;
use crate::systems::starfield::{Starfield, StarfieldConfig};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Initial canvas width in pixels, until the host reports a resize.
    pub viewport_width: f32,
    /// Initial canvas height in pixels.
    pub viewport_height: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_spheres: usize,
    /// Maximum number of point lights (default: 16).
    pub max_lights: usize,
    /// Maximum number of stars in the backdrop (default: 8192).
    pub max_stars: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_spheres: 64,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_stars: 8192,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, register textures, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick. `input` holds the events received since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lights: LightState,
    pub starfield: Starfield,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    /// Reported to the host so it can show the right cursor.
    pub controls_enabled: bool,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context sized for the given configuration.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_spheres),
            camera: Camera3D::new(config.viewport_width, config.viewport_height),
            lights: LightState::with_capacity(config.max_lights),
            starfield: Starfield::default(),
            textures: TextureRegistry::new(),
            events: Vec::with_capacity(config.max_events),
            controls_enabled: true,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Replace the star-field backdrop.
    pub fn set_starfield(&mut self, config: &StarfieldConfig, seed: u64) {
        self.starfield = Starfield::generate(config, seed);
        log::debug!("starfield: {} stars", self.starfield.count());
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn config_sizes_camera() {
        let config = GameConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::with_config(&config);
        assert_eq!(ctx.camera.viewport_width, 1280.0);
        assert!(ctx.controls_enabled);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 2.0));
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn set_starfield_generates_stars() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.starfield.count(), 0);
        ctx.set_starfield(&StarfieldConfig { count: 10, ..Default::default() }, 1);
        assert_eq!(ctx.starfield.count(), 10);
    }
}
