pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, TextureId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::camera::{Camera3D, CameraUniform, Ray};
pub use renderer::sphere_instance::{SphereInstance, SphereBuffer};
pub use input::queue::{InputEvent, InputQueue, CUSTOM_RESIZE};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{PointLight, LightState};
pub use systems::starfield::{Star, Starfield, StarfieldConfig};
pub use systems::sphere_render::build_sphere_buffer;
pub use bridge::protocol::{LIGHT_FLOATS, DEFAULT_MAX_LIGHTS};

// Extensions: decoupled optional systems
pub use extensions::{
    OrbitControls,
    Spring, SpringConfig, SpringState, SpringValue, BodySprings,
};
