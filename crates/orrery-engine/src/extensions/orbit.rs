// extensions/orbit.rs
//
// Orbit controls: user rotate / dolly / pan around the camera's look-at target.
// Games decide when the controls are enabled; disabled controls ignore input.

use std::f32::consts::{PI, TAU};
use glam::{Vec2, Vec3};
use crate::input::queue::InputEvent;
use crate::renderer::camera::Camera3D;

/// Keeps the camera off the poles so `look_at` never degenerates.
const POLAR_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    last: Vec2,
}

/// Orbit/pan/zoom camera input handler.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    enabled: bool,
    /// Full turn per viewport height of drag, times this factor.
    pub rotate_speed: f32,
    /// Dolly factor per wheel notch is `0.95^zoom_speed`.
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits in radians, measured from +Y.
    pub min_polar: f32,
    pub max_polar: f32,
    /// While held, drags pan instead of rotating.
    pan_modifier: bool,
    drag: Option<Drag>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar: 0.0,
            max_polar: PI,
            pan_modifier: false,
            drag: None,
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input. Disabling drops any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = None;
        }
    }

    pub fn set_pan_modifier(&mut self, held: bool) {
        self.pan_modifier = held;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed one input event. Returns true if the camera moved.
    pub fn handle(&mut self, event: &InputEvent, camera: &mut Camera3D) -> bool {
        if !self.enabled {
            return false;
        }
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.drag = Some(Drag { last: Vec2::new(x, y) });
                false
            }
            InputEvent::PointerMove { x, y } => {
                let Some(drag) = self.drag.as_mut() else {
                    return false;
                };
                let pos = Vec2::new(x, y);
                let delta = pos - drag.last;
                drag.last = pos;
                if delta == Vec2::ZERO {
                    return false;
                }
                if self.pan_modifier {
                    self.pan(camera, delta);
                } else {
                    self.rotate(camera, delta);
                }
                true
            }
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                self.drag = None;
                false
            }
            InputEvent::Wheel { delta_y } => self.dolly(camera, delta_y),
            _ => false,
        }
    }

    /// Rotate the eye around the target by a pixel delta.
    pub fn rotate(&self, camera: &mut Camera3D, delta: Vec2) {
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let h = camera.viewport_height.max(1.0);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta -= TAU * delta.x / h * self.rotate_speed;
        phi -= TAU * delta.y / h * self.rotate_speed;
        phi = phi
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        camera.eye = camera.target + spherical_to_offset(radius, phi, theta);
    }

    /// Move eye towards (wheel up) or away from (wheel down) the target.
    /// Returns true if the distance changed.
    pub fn dolly(&self, camera: &mut Camera3D, delta_y: f32) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let scale = 0.95_f32.powf(self.zoom_speed);
        let new_radius = if delta_y < 0.0 { radius * scale } else { radius / scale };
        let new_radius = new_radius.clamp(self.min_distance, self.max_distance);
        if (new_radius - radius).abs() <= f32::EPSILON {
            return false;
        }
        camera.eye = camera.target + offset * (new_radius / radius);
        true
    }

    /// Slide eye and target together in the view plane by a pixel delta.
    pub fn pan(&self, camera: &mut Camera3D, delta: Vec2) {
        let offset = camera.eye - camera.target;
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        // World units per pixel at the target's depth.
        let target_distance = offset.length() * (camera.fov_y / 2.0).tan();
        let h = camera.viewport_height.max(1.0);
        let scale = 2.0 * target_distance / h * self.pan_speed;
        let shift = right * (-delta.x * scale) + up * (delta.y * scale);
        camera.eye += shift;
        camera.target += shift;
    }
}

fn spherical_to_offset(radius: f32, phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        let mut cam = Camera3D::new(800.0, 600.0);
        cam.set_pose(Vec3::new(0.0, 3.0, 6.0), Vec3::ZERO);
        cam
    }

    #[test]
    fn drag_rotates_around_target_at_fixed_distance() {
        let mut cam = camera();
        let before = cam.distance();
        let mut controls = OrbitControls::new();
        controls.handle(&InputEvent::PointerDown { x: 400.0, y: 300.0 }, &mut cam);
        let moved = controls.handle(&InputEvent::PointerMove { x: 450.0, y: 310.0 }, &mut cam);
        assert!(moved);
        assert_ne!(cam.eye, Vec3::new(0.0, 3.0, 6.0));
        assert!((cam.distance() - before).abs() < 1e-4);
        assert_eq!(cam.target, Vec3::ZERO);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        assert!(!controls.handle(&InputEvent::PointerMove { x: 10.0, y: 10.0 }, &mut cam));
        assert_eq!(cam.eye, Vec3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 }, &mut cam);
        controls.set_enabled(false);
        assert!(!controls.is_dragging());
        assert!(!controls.handle(&InputEvent::PointerMove { x: 90.0, y: 0.0 }, &mut cam));
        assert!(!controls.handle(&InputEvent::Wheel { delta_y: -100.0 }, &mut cam));
        assert_eq!(cam.eye, Vec3::new(0.0, 3.0, 6.0));
    }

    #[test]
    fn wheel_up_moves_closer() {
        let mut cam = camera();
        let before = cam.distance();
        let mut controls = OrbitControls::new();
        assert!(controls.handle(&InputEvent::Wheel { delta_y: -1.0 }, &mut cam));
        assert!(cam.distance() < before);
        assert!(controls.handle(&InputEvent::Wheel { delta_y: 1.0 }, &mut cam));
        assert!((cam.distance() - before).abs() < 1e-4);
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let mut cam = camera();
        let controls = OrbitControls {
            min_distance: 6.0,
            ..OrbitControls::default()
        };
        for _ in 0..50 {
            controls.dolly(&mut cam, -1.0);
        }
        assert!((cam.distance() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn rotation_clamps_at_pole() {
        let mut cam = camera();
        let radius = cam.distance();
        let controls = OrbitControls::new();
        controls.rotate(&mut cam, Vec2::new(0.0, 10_000.0));
        let offset = cam.eye - cam.target;
        assert!(offset.is_finite());
        assert!(offset.y > 0.0);
        assert!((offset.length() - radius).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.set_pan_modifier(true);
        controls.handle(&InputEvent::PointerDown { x: 100.0, y: 100.0 }, &mut cam);
        controls.handle(&InputEvent::PointerMove { x: 150.0, y: 100.0 }, &mut cam);
        assert_ne!(cam.target, Vec3::ZERO);
        assert!((cam.eye - cam.target - Vec3::new(0.0, 3.0, 6.0)).length() < 1e-4);
        // Dragging right slides the scene right, so the camera moves left.
        assert!(cam.target.x < 0.0);
    }

    #[test]
    fn release_ends_drag() {
        let mut cam = camera();
        let mut controls = OrbitControls::new();
        controls.handle(&InputEvent::PointerDown { x: 0.0, y: 0.0 }, &mut cam);
        controls.handle(&InputEvent::PointerUp { x: 0.0, y: 0.0 }, &mut cam);
        assert!(!controls.is_dragging());
    }
}
