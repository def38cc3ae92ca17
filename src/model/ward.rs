use glam::Vec3A;

use super::ReflectanceModelT;

/// Ward anisotropic reflection with separate tangent and bitangent
/// roughness.
pub struct WardAnisotropic {
    roughness_x: f32,
    roughness_y: f32,
}

impl WardAnisotropic {
    pub fn new(roughness_x: f32, roughness_y: f32) -> Self {
        Self {
            roughness_x,
            roughness_y,
        }
    }

    fn compute(
        l: Vec3A,
        v: Vec3A,
        n: Vec3A,
        t: Vec3A,
        b: Vec3A,
        roughness_x: f32,
        roughness_y: f32,
    ) -> f32 {
        let dot_ln = l.dot(n);
        let dot_vn = v.dot(n);

        let h = (l + v).normalize();
        let dot_ht = h.dot(t) / roughness_x;
        let dot_hb = h.dot(b) / roughness_y;
        let dot_hn = h.dot(n);

        let exponent = -(dot_ht * dot_ht + dot_hb * dot_hb) / (dot_hn * dot_hn);
        let denominator =
            4.0 * std::f32::consts::PI * roughness_x * roughness_y * (dot_ln * dot_vn).sqrt();

        exponent.exp() / denominator
    }
}

impl ReflectanceModelT for WardAnisotropic {
    fn brdf_value(&self, in_dir: Vec3A, out_dir: Vec3A) -> f32 {
        Self::compute(
            in_dir,
            out_dir,
            Vec3A::Z,
            Vec3A::X,
            Vec3A::new(0.0, -1.0, 0.0),
            self.roughness_x,
            self.roughness_y,
        )
    }

    fn is_isotropic(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "Ward anisotropic"
    }

    fn description(&self) -> &'static str {
        "Gregory J. Ward, \"Measuring and modeling anisotropic reflection,\" Computer Graphics (SIGGRAPH '92 Proceedings), pp. 265-272, July 1992."
    }

    fn parameters(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("Roughness X", self.roughness_x),
            ("Roughness Y", self.roughness_y),
        ]
    }
}
