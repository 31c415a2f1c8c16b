// extensions/spring.rs
//
// Spring system: damped second-order motion towards a target, by EntityId.
// Unlike a tween there is no duration: changing the target re-aims the spring
// from its current value and velocity.
//
// Usage:
//   let mut springs = SpringState::new(SpringConfig::new(300.0, 10.0));
//   springs.track(entity_id, pos, scale);
//   springs.set_target(entity_id, Vec3::ZERO, 3.0);
//   springs.tick(dt, &mut scene);  // Advances all springs, updates entities

use std::collections::HashMap;
use std::ops::{Add, Mul, Sub};
use glam::Vec3;
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Integration sub-step in seconds. Stiff springs stay stable at 1 ms.
const SUB_STEP: f32 = 0.001;

/// A value a spring can animate.
pub trait SpringValue:
    Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;

    /// Size used for the rest check.
    fn magnitude(self) -> f32;
}

impl SpringValue for f32 {
    const ZERO: Self = 0.0;

    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl SpringValue for Vec3 {
    const ZERO: Self = Vec3::ZERO;

    fn magnitude(self) -> f32 {
        self.length()
    }
}

/// Spring physics constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Stiffness: pull per unit of displacement.
    pub tension: f32,
    /// Damping: drag per unit of velocity.
    pub friction: f32,
    pub mass: f32,
    /// Displacement and speed under which the spring snaps to its target.
    pub precision: f32,
}

impl SpringConfig {
    pub fn new(tension: f32, friction: f32) -> Self {
        Self {
            tension,
            friction,
            ..Default::default()
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 170.0,
            friction: 26.0,
            mass: 1.0,
            precision: 0.001,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring<T: SpringValue> {
    pub value: T,
    pub velocity: T,
    pub target: T,
    pub config: SpringConfig,
}

impl<T: SpringValue> Spring<T> {
    /// A spring resting at `value`.
    pub fn new(value: T, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            config,
        }
    }

    /// Re-aim the spring. Value and velocity carry over.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump straight to `value` and stop.
    pub fn snap(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == T::ZERO
    }

    /// Advance by `dt` seconds in sub-steps of at most one millisecond.
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_at_rest() {
            return;
        }
        let steps = (dt / SUB_STEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let inv_mass = 1.0 / self.config.mass.max(f32::EPSILON);

        for _ in 0..steps {
            let spring_force = (self.target - self.value) * self.config.tension;
            let damping_force = self.velocity * -self.config.friction;
            let accel = (spring_force + damping_force) * inv_mass;
            // Semi-implicit Euler: velocity first, then position.
            self.velocity = self.velocity + accel * h;
            self.value = self.value + self.velocity * h;
        }

        let precision = self.config.precision;
        if (self.target - self.value).magnitude() <= precision
            && self.velocity.magnitude() <= precision
        {
            self.value = self.target;
            self.velocity = T::ZERO;
        }
    }
}

/// Position and scale springs for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySprings {
    pub pos: Spring<Vec3>,
    pub scale: Spring<f32>,
}

/// Drives entity position and uniform scale with springs.
#[derive(Debug, Default)]
pub struct SpringState {
    config: SpringConfig,
    bodies: HashMap<EntityId, BodySprings>,
}

impl SpringState {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            bodies: HashMap::new(),
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Start tracking an entity, resting at the given pose.
    pub fn track(&mut self, entity: EntityId, pos: Vec3, scale: f32) {
        self.bodies.insert(entity, BodySprings {
            pos: Spring::new(pos, self.config),
            scale: Spring::new(scale, self.config),
        });
    }

    /// Set new targets. Returns false if the entity is not tracked.
    pub fn set_target(&mut self, entity: EntityId, pos: Vec3, scale: f32) -> bool {
        match self.bodies.get_mut(&entity) {
            Some(body) => {
                body.pos.set_target(pos);
                body.scale.set_target(scale);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, entity: EntityId) -> Option<&BodySprings> {
        self.bodies.get(&entity)
    }

    pub fn remove(&mut self, entity: EntityId) -> bool {
        self.bodies.remove(&entity).is_some()
    }

    /// Advance all springs and write the values to entities in the scene.
    pub fn tick(&mut self, dt: f32, scene: &mut Scene) {
        for (&id, body) in self.bodies.iter_mut() {
            body.pos.tick(dt);
            body.scale.tick(dt);
            if let Some(entity) = scene.get_mut(id) {
                entity.pos = body.pos.value;
                entity.scale = body.scale.value;
            }
        }
    }

    /// Whether every tracked spring has settled.
    pub fn is_at_rest(&self) -> bool {
        self.bodies
            .values()
            .all(|b| b.pos.is_at_rest() && b.scale.is_at_rest())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
