use glam::Vec3A;

use super::{fresnel_reflection, ReflectanceModelT};

/// Cook-Torrance microfacet reflection with a Beckmann distribution.
pub struct CookTorrance {
    roughness: f32,
    refractive_index: f32,
}

impl CookTorrance {
    pub fn new(roughness: f32, refractive_index: f32) -> Self {
        Self {
            roughness,
            refractive_index,
        }
    }

    fn compute(
        l: Vec3A,
        v: Vec3A,
        n: Vec3A,
        roughness: f32,
        refractive_index: f32,
    ) -> f32 {
        let dot_ln = l.dot(n);
        let dot_vn = v.dot(n);

        let h = (l + v).normalize();
        let dot_hn = h.dot(n);
        let dot_vh = v.dot(h).min(1.0);

        let sq_dot_hn = dot_hn * dot_hn;
        let sq_roughness = roughness * roughness;
        let sq_tan_hn = (1.0 - sq_dot_hn) / (sq_roughness * sq_dot_hn);

        let d = (-sq_tan_hn).exp() / (4.0 * sq_roughness * sq_dot_hn * sq_dot_hn);
        let f = fresnel_reflection(dot_vh.acos(), refractive_index);
        let g = (dot_hn * dot_vn / dot_vh).min(dot_hn * dot_ln / dot_vh);
        let g = (2.0 * g).min(1.0);

        std::f32::consts::FRAC_1_PI * d * f * g / (dot_ln * dot_vn)
    }
}

impl ReflectanceModelT for CookTorrance {
    fn brdf_value(&self, in_dir: Vec3A, out_dir: Vec3A) -> f32 {
        Self::compute(
            in_dir,
            out_dir,
            Vec3A::Z,
            self.roughness,
            self.refractive_index,
        )
    }

    fn is_isotropic(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Cook-Torrance"
    }

    fn description(&self) -> &'static str {
        "Robert L. Cook and Kenneth E. Torrance, \"A reflectance model for computer graphics,\" Computer Graphics (SIGGRAPH '81 Proceedings), pp. 307-316, July 1981."
    }

    fn parameters(&self) -> Vec<(&'static str, f32)> {
        vec![
            ("Roughness", self.roughness),
            ("Refractive index", self.refractive_index),
        ]
    }
}
