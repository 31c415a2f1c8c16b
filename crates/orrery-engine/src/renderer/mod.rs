pub mod camera;
pub mod sphere_instance;
