use crate::brdf::Brdf;
use crate::core::color::Color;
use crate::core::spectrum::Spectrum;

use super::{ReflectanceModel, ReflectanceModelT};

/// BRDF values above this are treated as numerically meaningless and
/// clamped before storage.
const MAX_BRDF_VALUE: f32 = 10000.0;

/// Populates a preset RGB sample set from an analytic model, optionally
/// tinted by `color`. Returns `false` (leaving the set untouched) if the
/// target is not in a three-channel mode.
pub fn setup_brdf(model: &ReflectanceModel, brdf: &mut Brdf, color: Color) -> bool {
    if brdf.sample_set().num_wavelengths() != 3 {
        log::warn!("setup_brdf: only RGB-mode sample sets are supported");
        return false;
    }

    let n0 = brdf.sample_set().num_angles0();
    let n1 = brdf.sample_set().num_angles1();
    let n2 = brdf.sample_set().num_angles2();
    let n3 = brdf.sample_set().num_angles3();

    const MIN_Z: f32 = 0.001;

    for i0 in 0..n0 {
        for i1 in 0..n1 {
            for i2 in 0..n2 {
                for i3 in 0..n3 {
                    let (mut in_dir, mut out_dir) = brdf.in_out_direction(i0, i1, i2, i3);

                    // Keep both directions strictly above the horizon so
                    // grazing cells stay evaluable.
                    in_dir.z = in_dir.z.max(MIN_Z);
                    in_dir = in_dir.normalize();
                    out_dir.z = out_dir.z.max(MIN_Z);
                    out_dir = out_dir.normalize();

                    let values = color * model.brdf_value(in_dir, out_dir);
                    debug_assert!(values.is_finite());

                    let sp = Spectrum::from(values.cwise_min(MAX_BRDF_VALUE));
                    brdf.sample_set_mut().set_spectrum(i0, i1, i2, i3, sp);
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brdf::SphericalBrdf;
    use crate::core::spectrum::ColorModel;
    use crate::model::Lambertian;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn lambert_fills_constant_spectra() {
        let mut brdf = SphericalBrdf::new(3, 1, 3, 3, ColorModel::Rgb, 3);
        {
            let ss = brdf.sample_set_mut();
            for i in 0..3 {
                let t = i as f32 / 2.0;
                ss.set_angle0(i, t * FRAC_PI_2);
                ss.set_angle2(i, t * FRAC_PI_2);
                ss.set_angle3(i, t * 2.0 * PI);
            }
        }

        let model = ReflectanceModel::from(Lambertian::new(1.0));
        assert!(setup_brdf(&model, brdf.brdf_mut(), Color::WHITE));

        let expected = std::f32::consts::FRAC_1_PI;
        for sp in brdf.sample_set().spectra() {
            for c in 0..3 {
                assert!((sp[c] - expected).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn spectral_mode_is_rejected() {
        let mut brdf = SphericalBrdf::new(2, 1, 2, 2, ColorModel::Spectral, 8);
        let model = ReflectanceModel::from(Lambertian::new(1.0));
        assert!(!setup_brdf(&model, brdf.brdf_mut(), Color::WHITE));
        assert!(brdf.sample_set().spectra().iter().all(|sp| sp.values().iter().all(|v| *v == 0.0)));
    }
}
