use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// A world-space ray with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Distance to the first surface hit on a sphere, or `None` on a miss.
    /// An origin inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// Perspective camera described by an eye point looking at a target.
/// Matches the host renderer's defaults: 75° vertical FOV, near 0.1, far 1000.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Canvas size in pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
}

/// Camera data as the host reads it (12 floats).
/// `[eye.xyz, target.xyz, up.xyz, fov_y_degrees, near, far]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraUniform {
    pub const FLOATS: usize = 12;
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }
}

impl Camera3D {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Default::default()
        }
    }

    /// Place the camera at `eye` looking at `target`. Idempotent.
    pub fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    /// Update the canvas size (e.g. on window resize).
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_width = width;
            self.viewport_height = height;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    /// Distance from the eye to the look-at target.
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Right-handed perspective, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to canvas pixels. `None` if it is behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport_width,
            (1.0 - ndc.y) * 0.5 * self.viewport_height,
        ))
    }

    /// Ray from the eye through a canvas pixel (for picking).
    pub fn screen_ray(&self, pixel: Vec2) -> Ray {
        let ndc_x = pixel.x / self.viewport_width * 2.0 - 1.0;
        let ndc_y = 1.0 - pixel.y / self.viewport_height * 2.0;
        let inv = self.view_projection().inverse();
        let far_point = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(self.eye, far_point - self.eye)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            eye: self.eye.to_array(),
            target: self.target.to_array(),
            up: self.up.to_array(),
            fov_y_degrees: self.fov_y.to_degrees(),
            near: self.near,
            far: self.far,
        }
    }
}
