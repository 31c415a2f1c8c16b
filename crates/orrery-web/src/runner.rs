use orrery_engine::{
    Game, GameConfig, EngineContext, AssetManifest,
    InputEvent, InputQueue, SphereBuffer, CameraUniform,
    FixedTimestep, ProtocolLayout, CUSTOM_RESIZE,
    build_sphere_buffer,
};
use orrery_engine::bridge::protocol::*;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to the extra ticks of a catch-up frame so events apply once.
    no_input: InputQueue,
    spheres: SphereBuffer,
    camera: CameraUniform,
    header: [f32; HEADER_FLOATS],
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            spheres: SphereBuffer::with_capacity(config.max_spheres),
            camera: CameraUniform::default(),
            header: [0.0; HEADER_FLOATS],
            timestep,
            layout,
            config,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.publish_frame();
        self.initialized = true;
        log::info!(
            "runner: {} entities, {} lights, {} stars, {} textures",
            self.ctx.scene.len(),
            self.ctx.lights.count(),
            self.ctx.starfield.count(),
            self.ctx.textures.len(),
        );
    }

    /// Push an input event into the queue. Resizes also update the camera.
    pub fn push_input(&mut self, event: InputEvent) {
        if let InputEvent::Custom { kind: CUSTOM_RESIZE, a, b, .. } = event {
            self.ctx.camera.resize(a, b);
        }
        self.input.push(event);
    }

    /// Run one frame: fixed-step updates, then rebuild the host buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
        }

        // Events wait for the next frame that actually runs a tick.
        if steps > 0 {
            self.input.drain();
        }

        self.publish_frame();
    }

    /// Override texture paths by name from a host-supplied manifest.
    /// Unknown names are ignored; a malformed manifest is logged and dropped.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                for texture in &manifest.textures {
                    if self.ctx.textures.set_path(&texture.name, &texture.path).is_none() {
                        log::warn!("manifest: no texture named {:?}", texture.name);
                    }
                }
            }
            Err(e) => log::error!("manifest: failed to parse: {}", e),
        }
    }

    /// Texture manifest for the host loader, as JSON.
    pub fn texture_manifest(&self) -> String {
        match self.ctx.textures.manifest().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("manifest: failed to serialize: {}", e);
                String::from("{\"textures\":[]}")
            }
        }
    }

    /// Read-only access to the game for game-specific exports.
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    fn publish_frame(&mut self) {
        build_sphere_buffer(self.ctx.scene.iter(), &mut self.spheres);
        self.camera = self.ctx.camera.uniform();
        self.frame = self.frame.wrapping_add(1);

        let sphere_count = self.sphere_count();
        let light_count = self.light_count();
        let star_count = self.star_count();
        let event_count = self.game_events_len();

        let h = &mut self.header;
        h[HEADER_LOCK] = 0.0;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_SPHERES] = self.layout.max_spheres as f32;
        h[HEADER_SPHERE_COUNT] = sphere_count as f32;
        h[HEADER_MAX_LIGHTS] = self.layout.max_lights as f32;
        h[HEADER_LIGHT_COUNT] = light_count as f32;
        h[HEADER_MAX_STARS] = self.layout.max_stars as f32;
        h[HEADER_STAR_COUNT] = star_count as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = event_count as f32;
        h[HEADER_AMBIENT_INTENSITY] = self.ctx.lights.ambient_intensity();
        h[HEADER_CONTROLS_ENABLED] = if self.ctx.controls_enabled { 1.0 } else { 0.0 };
        h[HEADER_STAR_SPEED] = self.ctx.starfield.speed();
        h[HEADER_STAR_FADE] = if self.ctx.starfield.fade() { 1.0 } else { 0.0 };
        h[HEADER_TEXTURE_COUNT] = self.ctx.textures.len() as f32;
    }

    // ---- Pointer accessors for host reads ----
    // Counts are clamped to the layout capacities the host allocated for.

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn spheres_ptr(&self) -> *const f32 {
        self.spheres.instances_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.instance_count().min(self.layout.max_spheres) as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.starfield.buffer_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.starfield.count().min(self.layout.max_stars) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.camera.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.camera.viewport_height
    }

    // ---- Capacity accessors ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Entity, GameEvent, MeshComponent};

    /// Counts how often update runs and how many events it sees.
    struct Probe {
        updates: u32,
        events_seen: usize,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_mesh(MeshComponent::sphere(1.5, 8)));
            ctx.textures.register("probe", "texture/probe.jpg");
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.events_seen += input.len();
            ctx.emit_event(GameEvent::new(1.0, self.updates as f32));
        }
    }

    fn runner() -> GameRunner<Probe> {
        let mut r = GameRunner::new(Probe { updates: 0, events_seen: 0 });
        r.init();
        r
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut r = GameRunner::new(Probe { updates: 0, events_seen: 0 });
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().updates, 0);
    }

    #[test]
    fn init_publishes_first_frame() {
        let r = runner();
        assert_eq!(r.sphere_count(), 1);
        assert_eq!(r.header()[HEADER_SPHERE_COUNT], 1.0);
        assert_eq!(r.header()[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(r.header()[HEADER_TEXTURE_COUNT], 1.0);
    }

    #[test]
    fn catch_up_ticks_see_input_once() {
        let mut r = runner();
        r.push_input(InputEvent::PointerDown { x: 1.0, y: 1.0 });
        r.tick(3.0 / 60.0 + 1e-4);
        assert_eq!(r.game().updates, 3);
        assert_eq!(r.game().events_seen, 1);
    }

    #[test]
    fn input_waits_for_a_real_tick() {
        let mut r = runner();
        r.push_input(InputEvent::PointerMove { x: 1.0, y: 1.0 });
        r.tick(0.001);
        assert_eq!(r.game().updates, 0);
        r.tick(1.0 / 60.0);
        assert_eq!(r.game().events_seen, 1);
    }

    #[test]
    fn events_are_per_frame() {
        let mut r = runner();
        r.tick(1.0 / 60.0);
        assert_eq!(r.game_events_len(), 1);
        r.tick(0.0);
        assert_eq!(r.game_events_len(), 0);
    }

    #[test]
    fn resize_updates_camera() {
        let mut r = runner();
        r.push_input(InputEvent::Custom { kind: CUSTOM_RESIZE, a: 1920.0, b: 1080.0, c: 0.0 });
        assert_eq!(r.viewport_width(), 1920.0);
        assert_eq!(r.viewport_height(), 1080.0);
    }

    #[test]
    fn manifest_override_and_bad_json() {
        let mut r = runner();
        r.load_manifest(r#"{ "textures": [ { "name": "probe", "path": "cdn/probe.jpg" } ] }"#);
        assert!(r.texture_manifest().contains("cdn/probe.jpg"));
        r.load_manifest("{ broken");
        assert!(r.texture_manifest().contains("cdn/probe.jpg"));
    }
}
