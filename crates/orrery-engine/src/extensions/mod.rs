// extensions/mod.rs
//
// Optional extension modules.
// These are decoupled from core Entity/Scene; games opt in by owning these systems.

pub mod orbit;
pub mod spring;

pub use orbit::OrbitControls;
pub use spring::{Spring, SpringConfig, SpringState, SpringValue, BodySprings};
