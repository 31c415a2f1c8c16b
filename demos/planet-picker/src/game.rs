/// Planet Picker: five textured planets on an arc in front of the camera.
///
/// Hovering a planet brightens its light and grows it slightly. Clicking one
/// springs it to the origin at triple size, shows its overlay heading and
/// locks the orbit camera.

use orrery_engine::*;
use glam::{Vec2, Vec3};

use crate::planets::{self, PLANET_COUNT, PLANET_RADIUS, PLANET_SEGMENTS};
use crate::selection::SelectionController;
use crate::visual::{self, PlanetVisual};

// ── Scene ────────────────────────────────────────────────────────────

const FIXED_DT: f32 = 1.0 / 60.0;

const CAMERA_EYE: Vec3 = Vec3::new(0.0, 3.0, 6.0);
const CAMERA_TARGET: Vec3 = Vec3::ZERO;

const AMBIENT_INTENSITY: f32 = 0.8;

const STARFIELD_SEED: u64 = 0x5EED_0F_57A25;

// ── Input ────────────────────────────────────────────────────────────

/// Pointer travel in pixels before a press stops counting as a click.
const DRAG_THRESHOLD: f32 = 5.0;
/// Holding Shift turns orbit drags into pans.
const KEY_SHIFT: u32 = 16;

// ── Game event kinds to the host ─────────────────────────────────────

pub const EVENT_SELECTION: f32 = 1.0;
pub const EVENT_HOVER: f32 = 2.0;

/// Puts the camera at its fixed viewpoint. Safe to call repeatedly.
pub fn apply_camera_pose(camera: &mut Camera3D) {
    camera.set_pose(CAMERA_EYE, CAMERA_TARGET);
}

/// A pointer press that may turn into a click.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    start: Vec2,
    planet: Option<usize>,
}

pub struct PlanetPicker {
    selection: SelectionController,
    visuals: [PlanetVisual; PLANET_COUNT],
    planet_ids: [Option<EntityId>; PLANET_COUNT],
    /// Index of each planet's point light in `LightState`.
    light_slots: [Option<usize>; PLANET_COUNT],
    springs: SpringState,
    controls: OrbitControls,
    press: Option<Press>,
}

impl PlanetPicker {
    pub fn new() -> Self {
        Self {
            selection: SelectionController::new(),
            visuals: planets::POSITIONS.map(PlanetVisual::new),
            planet_ids: [None; PLANET_COUNT],
            light_slots: [None; PLANET_COUNT],
            springs: SpringState::new(SpringConfig::new(
                visual::SPRING_TENSION,
                visual::SPRING_FRICTION,
            )),
            controls: OrbitControls::new(),
            press: None,
        }
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn visual(&self, index: usize) -> Option<&PlanetVisual> {
        self.visuals.get(index)
    }

    pub fn planet_id(&self, index: usize) -> Option<EntityId> {
        self.planet_ids.get(index).copied().flatten()
    }

    /// First hovered planet, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.visuals.iter().position(|v| v.is_hovered())
    }

    /// Overlay heading, empty while nothing is selected.
    pub fn overlay_label(&self) -> String {
        self.selection.overlay_label().unwrap_or_default()
    }

    // ── Picking ────────────────────────────────────────────────────

    /// Nearest planet under a canvas pixel, using current animated poses.
    fn pick(&self, ctx: &EngineContext, pixel: Vec2) -> Option<usize> {
        let ray = ctx.camera.screen_ray(pixel);
        let mut best: Option<(usize, f32)> = None;

        for (index, id) in self.planet_ids.iter().enumerate() {
            let Some(entity) = id.and_then(|id| ctx.scene.get(id)) else {
                continue;
            };
            let Some(radius) = entity.world_radius() else {
                continue;
            };
            if let Some(t) = ray.intersect_sphere(entity.pos, radius) {
                if best.map_or(true, |(_, best_t)| t < best_t) {
                    best = Some((index, t));
                }
            }
        }

        best.map(|(index, _)| index)
    }

    fn set_hover(&mut self, hit: Option<usize>) {
        for (index, visual) in self.visuals.iter_mut().enumerate() {
            if visual.set_hovered(hit == Some(index)) {
                log::debug!("hover: planet {} {}", index, visual.is_hovered());
            }
        }
    }

    fn select(&mut self, index: usize) {
        if self.selection.is_selected(index) {
            return;
        }
        self.selection.select(index);
        if let Some(label) = planets::label(index) {
            log::info!("selected planet {} ({})", index, label);
        }
    }

    // ── Input ──────────────────────────────────────────────────────

    fn handle_event(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let pos = Vec2::new(x, y);
                let hit = self.pick(ctx, pos);
                self.set_hover(hit);
                self.press = Some(Press { start: pos, planet: hit });
            }
            InputEvent::PointerMove { x, y } => {
                let hit = self.pick(ctx, Vec2::new(x, y));
                self.set_hover(hit);
            }
            InputEvent::PointerUp { x, y } => {
                let pos = Vec2::new(x, y);
                let hit = self.pick(ctx, pos);
                self.set_hover(hit);
                if let Some(press) = self.press.take() {
                    let is_click = press.start.distance(pos) <= DRAG_THRESHOLD;
                    match hit {
                        Some(index) if is_click && press.planet == hit => self.select(index),
                        _ => {}
                    }
                }
            }
            InputEvent::PointerLeave => {
                self.set_hover(None);
                self.press = None;
            }
            InputEvent::KeyDown { key_code: KEY_SHIFT } => self.controls.set_pan_modifier(true),
            InputEvent::KeyUp { key_code: KEY_SHIFT } => self.controls.set_pan_modifier(false),
            _ => {}
        }

        self.controls.set_enabled(self.selection.controls_enabled());
        self.controls.handle(event, &mut ctx.camera);
    }

    // ── Per-tick state ─────────────────────────────────────────────

    fn update_targets(&mut self) {
        for index in 0..PLANET_COUNT {
            let Some(id) = self.planet_ids[index] else {
                continue;
            };
            let target = self.visuals[index].target(self.selection.is_selected(index));
            self.springs.set_target(id, target.pos, target.scale);
        }
    }

    fn update_lights(&self, ctx: &mut EngineContext) {
        for (index, slot) in self.light_slots.iter().enumerate() {
            let Some(light) = slot.and_then(|s| ctx.lights.get_mut(s)) else {
                continue;
            };
            light.intensity = visual::light_intensity(
                PLANET_RADIUS,
                self.visuals[index].is_hovered(),
                self.selection.is_selected(index),
            );
        }
    }

    fn emit_state(&self, ctx: &mut EngineContext) {
        let encode = |index: Option<usize>| index.map_or(-1.0, |i| i as f32);
        ctx.emit_event(GameEvent::new(EVENT_SELECTION, encode(self.selected())));
        ctx.emit_event(GameEvent::new(EVENT_HOVER, encode(self.hovered())));
    }
}

impl Default for PlanetPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PlanetPicker {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: FIXED_DT,
            max_spheres: 16,
            max_lights: 8,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        for index in 0..PLANET_COUNT {
            let texture = ctx
                .textures
                .register(&planets::texture_name(index), planets::TEXTURES[index]);
            let home = self.visuals[index].home();

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(planets::LABELS[index])
                    .with_pos(home)
                    .with_scale(visual::SCALE_REST)
                    .with_mesh(MeshComponent::sphere(PLANET_RADIUS, PLANET_SEGMENTS).with_texture(texture)),
            );
            self.springs.track(id, home, visual::SCALE_REST);
            self.planet_ids[index] = Some(id);

            // Each planet's light sits at the scene origin, not on the planet.
            let intensity = visual::light_intensity(PLANET_RADIUS, false, false);
            self.light_slots[index] = Some(ctx.lights.add(PointLight::white(Vec3::ZERO, intensity)));
        }

        ctx.lights.set_ambient(1.0, 1.0, 1.0);
        ctx.lights.set_ambient_intensity(AMBIENT_INTENSITY);

        ctx.set_starfield(
            &StarfieldConfig {
                fade: true,
                ..StarfieldConfig::default()
            },
            STARFIELD_SEED,
        );

        apply_camera_pose(&mut ctx.camera);
        self.controls.set_enabled(self.selection.controls_enabled());
        ctx.controls_enabled = self.controls.is_enabled();

        log::info!(
            "planet-picker: {} planets, {} stars",
            PLANET_COUNT,
            ctx.starfield.count()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_event(ctx, event);
        }

        self.update_targets();
        self.springs.tick(FIXED_DT, &mut ctx.scene);
        self.update_lights(ctx);

        ctx.controls_enabled = self.selection.controls_enabled();
        self.emit_state(ctx);
    }
}
