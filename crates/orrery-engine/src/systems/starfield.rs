//! Star-field backdrop.
//!
//! Stars are scattered in a spherical shell around the origin once at init.
//! Twinkle and fade are shader work on the host side; only `speed` and
//! `fade` are forwarded.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::TAU;

use super::rng::Rng;

/// Star-field parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldConfig {
    /// Inner radius of the star shell.
    pub radius: f32,
    /// Shell thickness; stars start at `radius + depth` and drift inward.
    pub depth: f32,
    pub count: usize,
    /// Size multiplier for every star.
    pub factor: f32,
    /// HSL saturation of star colours (0 = white stars).
    pub saturation: f32,
    /// Fade stars towards the shell edge.
    pub fade: bool,
    /// Twinkle animation speed.
    pub speed: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            fade: false,
            speed: 1.0,
        }
    }
}

/// A single star as the host reads it (8 floats).
/// `[x, y, z, r, g, b, size, pad]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub size: f32,
    pub _pad: f32,
}

impl Star {
    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Generated star field plus the animation flags the host needs.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
    speed: f32,
    fade: bool,
}

impl Starfield {
    /// Lightness used for every star colour.
    const LIGHTNESS: f32 = 0.9;

    /// Scatter `config.count` stars, deterministically for a given seed.
    pub fn generate(config: &StarfieldConfig, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let mut stars = Vec::with_capacity(config.count);
        let mut r = config.radius + config.depth;
        let increment = if config.count > 0 {
            config.depth / config.count as f32
        } else {
            0.0
        };

        for i in 0..config.count {
            r -= increment * rng.next_f32();
            // Uniform direction: cos(phi) uniform in [-1, 1], theta uniform in [0, 2π).
            let phi = (1.0 - rng.next_f32() * 2.0).acos();
            let theta = rng.next_f32() * TAU;
            let pos = Vec3::new(
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
                r * phi.sin() * theta.cos(),
            );
            let hue = i as f32 / config.count as f32;
            let [cr, cg, cb] = hsl_to_rgb(hue, config.saturation, Self::LIGHTNESS);
            let size = (0.5 + 0.5 * rng.next_f32()) * config.factor;
            stars.push(Star {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                r: cr,
                g: cg,
                b: cb,
                size,
                _pad: 0.0,
            });
        }

        Self {
            stars,
            speed: config.speed,
            fade: config.fade,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn count(&self) -> usize {
        self.stars.len()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn fade(&self) -> bool {
        self.fade
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.stars.as_ptr() as *const f32
    }
}

/// HSL (all components in [0, 1]) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    [
        hue_to_rgb(q, p, h + 1.0 / 3.0),
        hue_to_rgb(q, p, h),
        hue_to_rgb(q, p, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
