use glam::Vec3A;

/// Number of directions in the fixed upper-hemisphere table.
pub const NUM_SAMPLES_ON_HEMISPHERE: usize = 2203;

lazy_static! {
    /// Fixed table of well-spaced unit vectors on the upper hemisphere:
    /// a golden-angle spiral with z stratified as i/N. The Lambertian
    /// directional-hemispherical reflectance under this table is exactly
    /// (N - 1) / N = 0.999546, the fixed point used by energy-conservation
    /// clamping.
    pub static ref HEMISPHERE_SAMPLES: Vec<Vec3A> = {
        let golden_angle = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());

        (0..NUM_SAMPLES_ON_HEMISPHERE)
            .map(|i| {
                let z = i as f32 / NUM_SAMPLES_ON_HEMISPHERE as f32;
                let radius = (1.0 - z * z).sqrt();
                let phi = golden_angle * i as f32;
                Vec3A::new(radius * phi.cos(), radius * phi.sin(), z)
            })
            .collect()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_unit_and_upper() {
        for dir in HEMISPHERE_SAMPLES.iter() {
            assert!((dir.length() - 1.0).abs() < 1e-5);
            assert!(dir.z >= 0.0);
        }
    }

    #[test]
    fn cosine_sum_matches_lambert_fixed_point() {
        let sum: f64 = HEMISPHERE_SAMPLES.iter().map(|d| d.z as f64).sum();
        let reflectance = 2.0 * sum / NUM_SAMPLES_ON_HEMISPHERE as f64;
        assert!((reflectance - 0.999546).abs() < 1e-5);
    }
}
