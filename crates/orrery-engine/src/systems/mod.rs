pub mod lighting;
pub mod rng;
pub mod sphere_render;
pub mod starfield;
