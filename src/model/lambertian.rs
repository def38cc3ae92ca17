use glam::Vec3A;

use super::ReflectanceModelT;

/// Ideal diffuse reflection.
pub struct Lambertian {
    albedo: f32,
}

impl Lambertian {
    pub fn new(albedo: f32) -> Self {
        Self { albedo }
    }
}

impl ReflectanceModelT for Lambertian {
    fn brdf_value(&self, _in_dir: Vec3A, _out_dir: Vec3A) -> f32 {
        self.albedo * std::f32::consts::FRAC_1_PI
    }

    fn is_isotropic(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Lambertian"
    }

    fn description(&self) -> &'static str {
        "Ideal diffuse reflection: radiance independent of the outgoing direction."
    }

    fn parameters(&self) -> Vec<(&'static str, f32)> {
        vec![("Albedo", self.albedo)]
    }
}
