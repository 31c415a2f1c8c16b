use bytemuck::{Pod, Zeroable};

/// Per-instance sphere data read by the host's mesh renderer.
/// 12 floats = 48 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Unscaled mesh radius.
    pub radius: f32,
    /// Uniform scale applied on top of `radius`.
    pub scale: f32,
    /// Texture index, or -1 for untextured.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub width_segments: f32,
    pub height_segments: f32,
    pub _pad: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sphere instances for the current frame.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
}

impl SphereBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn as_slice(&self) -> &[SphereInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for SphereBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), SphereInstance::STRIDE_BYTES);
        assert_eq!(SphereInstance::FLOATS, 12);
    }

    #[test]
    fn cast_to_floats() {
        let inst = SphereInstance { x: 1.0, z: -3.0, texture: 2.0, ..Default::default() };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[2], -3.0);
        assert_eq!(floats[5], 2.0);
    }
}
