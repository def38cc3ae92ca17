mod hemisphere;

pub use hemisphere::*;

use glam::Vec3A;

use crate::brdf::Brdf;
use crate::core::spectrum::Spectrum;

/// Estimates directional-hemispherical reflectance of a tabulated BRDF by
/// quadrature over the fixed hemisphere direction table.
pub struct Integrator {
    num_samples: usize,
}

impl Integrator {
    pub fn new() -> Self {
        Self {
            num_samples: NUM_SAMPLES_ON_HEMISPHERE,
        }
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Reflectance of `brdf` for light arriving from `in_dir`, one value
    /// per wavelength channel.
    pub fn compute_reflectance(&self, brdf: &Brdf, in_dir: Vec3A) -> Spectrum {
        let num_wavelengths = brdf.sample_set().num_wavelengths();
        let mut sum = vec![0.0f64; num_wavelengths];

        for out_dir in HEMISPHERE_SAMPLES.iter().take(self.num_samples) {
            let sp = brdf.spectrum_at_dirs(in_dir, *out_dir);
            let cos_out_theta = out_dir.z;
            for (acc, value) in sum.iter_mut().zip(sp.values()) {
                *acc += (value * cos_out_theta) as f64;
            }
        }

        // Uniform solid-angle weight 2pi / N.
        let weight = 2.0 * std::f64::consts::PI / self.num_samples as f64;
        let mut reflectance = Spectrum::zero(num_wavelengths);
        for (out, acc) in (0..num_wavelengths).zip(&sum) {
            reflectance[out] = (acc * weight) as f32;
        }

        reflectance
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brdf::SphericalBrdf;
    use crate::core::spectrum::ColorModel;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn lambert_reflectance_is_just_below_one() {
        let mut brdf = SphericalBrdf::new(4, 1, 4, 4, ColorModel::Monochrome, 1);
        {
            let ss = brdf.sample_set_mut();
            for i in 0..4 {
                let t = i as f32 / 3.0;
                ss.set_angle0(i, t * FRAC_PI_2);
                ss.set_angle2(i, t * FRAC_PI_2);
                ss.set_angle3(i, t * 2.0 * PI);
            }
            for sp in ss.spectra_mut() {
                sp.fill(std::f32::consts::FRAC_1_PI);
            }
        }

        let integrator = Integrator::new();
        let reflectance = integrator.compute_reflectance(brdf.brdf(), glam::Vec3A::Z);
        assert!((reflectance[0] - 0.999546).abs() < 1e-4);
        assert!(reflectance[0] <= 1.0);
    }
}
