//! Post-processing operators for tabulated reflectance data.
//!
//! The operators either mutate a sample set in place or return a newly
//! allocated one; they never hold spectra outside the target set. Failed
//! entry preconditions log a warning and leave the input untouched.

use std::f32::consts::PI;

use crate::brdf::{Brdf, SphericalBrdf};
use crate::core::colorimetry;
use crate::core::sample_set::SampleSet;
use crate::core::sample_set2d::SampleSet2D;
use crate::core::spectrum::{ColorModel, Spectrum};
use crate::core::util;
use crate::integrator::Integrator;
use crate::param::ParametrizationT;

/// Lambertian directional-hemispherical reflectance under [`Integrator`].
/// Energy-conservation clamping scales down to this value instead of 1 so
/// a Lambertian surface is left exactly unchanged.
const LAMBERT_REFLECTANCE: f32 = 0.999546;

/// Divides every spectrum by the cosine of its outgoing polar angle.
///
/// At grazing samples where the cosine is zero or negative, the already
/// compensated spectrum one step down axis 2 is carried down instead,
/// which avoids blowing up measurements near the horizon.
pub fn divide_by_cosine_out_theta(brdf: &mut Brdf) {
    let (n0, n1, n2, n3) = dimensions(brdf.sample_set());

    for i0 in 0..n0 {
        for i1 in 0..n1 {
            for i2 in 0..n2 {
                for i3 in 0..n3 {
                    let (_, out_dir) = brdf.in_out_direction(i0, i1, i2, i3);
                    let cos_out_theta = out_dir.z;

                    if cos_out_theta <= 0.0 && i2 > 0 {
                        // Assume i2 is the polar index of the outgoing
                        // direction and carry the already compensated
                        // neighbor down.
                        let below = brdf.sample_set().spectrum(i0, i1, i2 - 1, i3).clone();
                        brdf.sample_set_mut().set_spectrum(i0, i1, i2, i3, below);
                    } else {
                        *brdf.sample_set_mut().spectrum_mut(i0, i1, i2, i3) /= cos_out_theta;
                    }
                }
            }
        }
    }
}

/// Completes a BRDF measured on one side of the incident plane by mirroring
/// the outgoing azimuth. Returns a new BRDF whose axis 3 contains the
/// original angles plus `2pi - phi` for every interior one, sorted
/// ascending.
pub fn fill_symmetric_brdf(brdf: &SphericalBrdf) -> SphericalBrdf {
    let max_out_phi = 2.0 * PI;

    let mut filled_angles = Vec::new();
    for i in 0..brdf.num_out_phi() {
        let out_phi = brdf.out_phi(i);
        let omitted = out_phi != 0.0
            && !util::is_equal(out_phi, PI)
            && !util::is_equal(out_phi, max_out_phi);
        if omitted {
            filled_angles.push(max_out_phi - out_phi);
        }
    }

    let ss = brdf.sample_set();

    let mut filled_brdf = SphericalBrdf::new(
        brdf.num_in_theta(),
        brdf.num_in_phi(),
        brdf.num_out_theta(),
        brdf.num_out_phi() + filled_angles.len(),
        ss.color_model(),
        ss.num_wavelengths(),
    );

    {
        let filled_ss = filled_brdf.sample_set_mut();
        filled_ss.angles0_mut().copy_from_slice(ss.angles0());
        filled_ss.angles1_mut().copy_from_slice(ss.angles1());
        filled_ss.angles2_mut().copy_from_slice(ss.angles2());
        filled_ss.wavelengths_mut().copy_from_slice(ss.wavelengths());
    }
    for i in 0..filled_brdf.num_out_phi() {
        let angle = if i < brdf.num_out_phi() {
            brdf.out_phi(i)
        } else {
            filled_angles[i - brdf.num_out_phi()]
        };
        filled_brdf.set_out_phi(i, angle);
    }
    filled_brdf
        .sample_set_mut()
        .angles3_mut()
        .sort_by(|a, b| a.partial_cmp(b).unwrap());

    for i0 in 0..filled_brdf.num_in_theta() {
        for i1 in 0..filled_brdf.num_in_phi() {
            for i2 in 0..filled_brdf.num_out_theta() {
                for i3 in 0..filled_brdf.num_out_phi() {
                    let out_phi = filled_brdf.out_phi(i3);

                    // Find the source column: same azimuth or its mirror.
                    let mut orig_index = 0;
                    for i in 0..brdf.num_out_phi() {
                        let orig_out_phi = brdf.out_phi(i);
                        if orig_out_phi == out_phi
                            || util::is_equal(orig_out_phi, max_out_phi - out_phi)
                        {
                            orig_index = i;
                            break;
                        }
                    }

                    let sp = ss.spectrum(i0, i1, i2, orig_index).clone();
                    filled_brdf.sample_set_mut().set_spectrum(i0, i1, i2, i3, sp);
                }
            }
        }
    }

    filled_brdf
}

/// Makes the data at `inTheta = 0` independent of the incoming azimuth,
/// which is undefined there: for each outgoing cell, all axis-1 rows at
/// `i0 = 0` are replaced by their average. If the axis-1 endpoints
/// coincide modulo the full round (periodic duplicate), the last row is
/// excluded from the average.
///
/// Skipped for anisotropic data whose parametrization measures the
/// incoming polar angle on axis 0 down to zero; averaging would discard
/// real variation there.
pub fn fill_incoming_polar0_data(brdf: &mut Brdf) {
    let ss = brdf.sample_set();

    if !ss.is_isotropic()
        && brdf.parametrization().has_incoming_polar_axes()
        && ss.angle0(0) == 0.0
    {
        log::warn!("fill_incoming_polar0_data: skipped for anisotropic incoming-polar data");
        return;
    }

    let (_, n1, n2, n3) = dimensions(ss);
    let num_wavelengths = ss.num_wavelengths();

    // The last axis-1 row is a duplicate of the first when the endpoints
    // coincide, either directly or one full round apart.
    let max_angle1 = brdf.parametrization().max_angle1();
    let exclude_last = n1 > 1
        && (util::is_equal(ss.angle1(0), ss.angle1(n1 - 1))
            || util::is_equal(ss.angle1(0) + max_angle1, ss.angle1(n1 - 1)));
    let num_averaged = if exclude_last { n1 - 1 } else { n1 };

    for i2 in 0..n2 {
        for i3 in 0..n3 {
            let mut sum = Spectrum::zero(num_wavelengths);
            for i1 in 0..num_averaged {
                sum += brdf.sample_set().spectrum(0, i1, i2, i3);
            }
            let avg = &sum / num_averaged as f32;

            for i1 in 0..n1 {
                brdf.sample_set_mut().set_spectrum(0, i1, i2, i3, avg.clone());
            }
        }
    }
}

/// Returns a copy of a spherical BRDF whose outgoing azimuth is rotated by
/// `rotation_angle` (radians, `-2pi < a < 2pi`) modulo the full round.
///
/// On an equal-interval axis the angles are kept and the spectra resampled;
/// otherwise the axis values themselves rotate and are re-sorted.
pub fn rotate_out_phi(brdf: &SphericalBrdf, rotation_angle: f32) -> SphericalBrdf {
    debug_assert!(rotation_angle > -2.0 * PI && rotation_angle < 2.0 * PI);

    let rotation_angle = if rotation_angle < 0.0 {
        rotation_angle + 2.0 * PI
    } else {
        rotation_angle
    };

    let mut rotated = brdf.clone();

    rotated.sample_set_mut().update_angle_attributes();
    if !rotated.sample_set().is_equal_interval_angles3() {
        for i in 0..rotated.num_out_phi() {
            let mut out_phi = rotated.out_phi(i) + rotation_angle;
            if out_phi > 2.0 * PI {
                out_phi -= 2.0 * PI;
            }
            rotated.set_out_phi(i, out_phi);
        }
        rotated
            .sample_set_mut()
            .angles3_mut()
            .sort_by(|a, b| a.partial_cmp(b).unwrap());
    }

    for i0 in 0..rotated.num_in_theta() {
        for i1 in 0..rotated.num_in_phi() {
            for i2 in 0..rotated.num_out_theta() {
                for i3 in 0..rotated.num_out_phi() {
                    let in_theta = rotated.in_theta(i0);
                    let in_phi = rotated.in_phi(i1);
                    let out_theta = rotated.out_theta(i2);
                    let mut out_phi = rotated.out_phi(i3) - rotation_angle;
                    if out_phi < 0.0 {
                        out_phi += 2.0 * PI;
                    }

                    let sp = brdf.spectrum_at(in_theta, in_phi, out_theta, out_phi);
                    rotated.sample_set_mut().set_spectrum(i0, i1, i2, i3, sp);
                }
            }
        }
    }

    rotated
}

/// Scales down every outgoing distribution whose directional-hemispherical
/// reflectance exceeds one. Returns the per-incoming-direction reflectances
/// computed along the way.
///
/// Offending distributions are divided by `rho_max / K` with `K` the
/// Lambertian reflectance under the same integrator, so an exactly
/// energy-preserving diffuse surface is a fixed point.
pub fn fix_energy_conservation(brdf: &mut Brdf) -> SampleSet2D {
    let (n0, n1, n2, n3) = dimensions(brdf.sample_set());

    let mut reflectances = SampleSet2D::new(
        n0,
        n1,
        brdf.sample_set().color_model(),
        brdf.sample_set().num_wavelengths(),
    );
    reflectances
        .theta_angles_mut()
        .copy_from_slice(brdf.sample_set().angles0());
    reflectances
        .phi_angles_mut()
        .copy_from_slice(brdf.sample_set().angles1());
    reflectances
        .wavelengths_mut()
        .copy_from_slice(brdf.sample_set().wavelengths());

    let integrator = Integrator::new();

    for i0 in 0..n0 {
        for i1 in 0..n1 {
            let in_dir = util::spherical_to_xyz(
                brdf.sample_set().angle0(i0),
                brdf.sample_set().angle1(i1),
            );
            let reflectance = integrator.compute_reflectance(brdf, in_dir);
            let max_reflectance = reflectance.max_coeff();
            reflectances.set_spectrum(i0, i1, reflectance);

            if max_reflectance > 1.0 {
                let scale = max_reflectance / LAMBERT_REFLECTANCE;
                for i2 in 0..n2 {
                    for i3 in 0..n3 {
                        *brdf.sample_set_mut().spectrum_mut(i0, i1, i2, i3) /= scale;
                    }
                }
            }
        }
    }

    reflectances
}

/// Closes periodic azimuth axes by copying the spectra at angle 0 onto the
/// duplicated sample at the full round. Idempotent.
pub fn copy_spectra_from_phi_of_zero_to_2pi(brdf: &mut Brdf) {
    let max_angle1 = brdf.parametrization().max_angle1();
    let max_angle3 = brdf.parametrization().max_angle3();
    let ss = brdf.sample_set_mut();
    let (n0, n1, n2, n3) = dimensions(ss);

    if n1 >= 2 && ss.angle1(0) == 0.0 && ss.angle1(n1 - 1) >= max_angle1 {
        for i0 in 0..n0 {
            for i2 in 0..n2 {
                for i3 in 0..n3 {
                    let sp = ss.spectrum(i0, 0, i2, i3).clone();
                    ss.set_spectrum(i0, n1 - 1, i2, i3, sp);
                }
            }
        }
    }

    if n3 >= 2 && ss.angle3(0) == 0.0 && ss.angle3(n3 - 1) >= max_angle3 {
        for i0 in 0..n0 {
            for i1 in 0..n1 {
                for i2 in 0..n2 {
                    let sp = ss.spectrum(i0, i1, i2, 0).clone();
                    ss.set_spectrum(i0, i1, i2, n3 - 1, sp);
                }
            }
        }
    }
}

/// Converts a CIE-XYZ sample set to linear sRGB in place.
pub fn xyz_to_srgb(samples: &mut SampleSet) {
    if samples.color_model() != ColorModel::Xyz {
        log::warn!(
            "xyz_to_srgb: not a CIE-XYZ sample set: {:?}",
            samples.color_model()
        );
        return;
    }

    for sp in samples.spectra_mut() {
        let rgb = colorimetry::xyz_to_srgb(sp.to_color());
        *sp = Spectrum::from(rgb);
    }

    samples.set_color_model(ColorModel::Rgb);
}

/// Sets every channel of every spectrum to `value`.
pub fn fill_spectra(samples: &mut SampleSet, value: f32) {
    for sp in samples.spectra_mut() {
        sp.fill(value);
    }
}

/// Scales every spectrum by `value`.
pub fn multiply_spectra(samples: &mut SampleSet, value: f32) {
    for sp in samples.spectra_mut() {
        *sp *= value;
    }
}

/// Clamps negative channels to zero. Idempotent and monotone.
pub fn fix_negative_spectra(samples: &mut SampleSet) {
    for sp in samples.spectra_mut() {
        *sp = sp.cwise_max(0.0);
    }
}

fn dimensions(ss: &SampleSet) -> (usize, usize, usize, usize) {
    (
        ss.num_angles0(),
        ss.num_angles1(),
        ss.num_angles2(),
        ss.num_angles3(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::Spherical;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn monochrome_set(n0: usize, n1: usize, n2: usize, n3: usize) -> SampleSet {
        SampleSet::new(n0, n1, n2, n3, ColorModel::Monochrome, 1)
    }

    #[test]
    fn fill_and_multiply() {
        let mut ss = monochrome_set(2, 1, 2, 2);
        fill_spectra(&mut ss, 2.0);
        multiply_spectra(&mut ss, 1.5);
        assert!(ss.spectra().iter().all(|sp| sp[0] == 3.0));
    }

    #[test]
    fn negative_spectra_are_clamped_idempotently() {
        let mut ss = monochrome_set(1, 1, 1, 2);
        ss.set_spectrum(0, 0, 0, 0, Spectrum::from_slice(&[-0.5]));
        ss.set_spectrum(0, 0, 0, 1, Spectrum::from_slice(&[0.25]));

        fix_negative_spectra(&mut ss);
        assert_eq!(ss.spectrum(0, 0, 0, 0)[0], 0.0);
        assert_eq!(ss.spectrum(0, 0, 0, 1)[0], 0.25);

        let before: Vec<Spectrum> = ss.spectra().to_vec();
        fix_negative_spectra(&mut ss);
        assert_eq!(ss.spectra(), &before[..]);
    }

    #[test]
    fn xyz_to_srgb_requires_xyz_model() {
        let mut rgb = SampleSet::new(1, 1, 1, 1, ColorModel::Rgb, 3);
        fill_spectra(&mut rgb, 0.5);
        let before = rgb.spectrum(0, 0, 0, 0).clone();
        xyz_to_srgb(&mut rgb);
        // Unchanged, including the color model.
        assert_eq!(rgb.color_model(), ColorModel::Rgb);
        assert_eq!(rgb.spectrum(0, 0, 0, 0), &before);
    }

    #[test]
    fn xyz_white_becomes_unit_rgb() {
        let mut ss = SampleSet::new(1, 1, 2, 2, ColorModel::Xyz, 3);
        for sp in ss.spectra_mut() {
            *sp = Spectrum::from_slice(&[0.95047, 1.0, 1.08883]);
        }
        xyz_to_srgb(&mut ss);
        assert_eq!(ss.color_model(), ColorModel::Rgb);
        for sp in ss.spectra() {
            for c in 0..3 {
                assert!((sp[c] - 1.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn incoming_polar0_averages_axis1() {
        let mut ss = monochrome_set(2, 3, 2, 2);
        // inTheta starts above zero so the anisotropic guard does not fire.
        ss.set_angle0(0, 0.1);
        ss.set_angle0(1, FRAC_PI_2);
        for i1 in 0..3 {
            ss.set_angle1(i1, i1 as f32);
            for i2 in 0..2 {
                for i3 in 0..2 {
                    ss.set_spectrum(0, i1, i2, i3, Spectrum::filled(1, i1 as f32));
                    ss.set_spectrum(1, i1, i2, i3, Spectrum::filled(1, 9.0));
                }
            }
        }

        let mut brdf = Brdf::from_sample_set(ss, Spherical.into());
        fill_incoming_polar0_data(&mut brdf);

        let ss = brdf.sample_set();
        for i1 in 0..3 {
            for i2 in 0..2 {
                for i3 in 0..2 {
                    assert!((ss.spectrum(0, i1, i2, i3)[0] - 1.0).abs() < 1e-6);
                    assert_eq!(ss.spectrum(1, i1, i2, i3)[0], 9.0);
                }
            }
        }
    }

    #[test]
    fn incoming_polar0_average_drops_periodic_duplicate() {
        let mut ss = monochrome_set(2, 3, 2, 2);
        ss.set_angle0(0, 0.1);
        ss.set_angle0(1, FRAC_PI_2);
        // The 2*pi row duplicates the 0 row and must not enter the average.
        let phis = [0.0, PI, 2.0 * PI];
        let values = [1.0, 3.0, 100.0];
        for i1 in 0..3 {
            ss.set_angle1(i1, phis[i1]);
            for i2 in 0..2 {
                for i3 in 0..2 {
                    ss.set_spectrum(0, i1, i2, i3, Spectrum::filled(1, values[i1]));
                }
            }
        }

        let mut brdf = Brdf::from_sample_set(ss, Spherical.into());
        fill_incoming_polar0_data(&mut brdf);

        let ss = brdf.sample_set();
        for i1 in 0..3 {
            for i2 in 0..2 {
                for i3 in 0..2 {
                    assert!((ss.spectrum(0, i1, i2, i3)[0] - 2.0).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn incoming_polar0_guard_skips_anisotropic() {
        let mut ss = monochrome_set(2, 3, 2, 2);
        ss.set_angle0(1, FRAC_PI_2);
        for i1 in 0..3 {
            ss.set_angle1(i1, i1 as f32);
            for i2 in 0..2 {
                for i3 in 0..2 {
                    ss.set_spectrum(0, i1, i2, i3, Spectrum::filled(1, i1 as f32));
                }
            }
        }

        let mut brdf = Brdf::from_sample_set(ss, Spherical.into());
        fill_incoming_polar0_data(&mut brdf);

        let ss = brdf.sample_set();
        for i1 in 0..3 {
            assert_eq!(ss.spectrum(0, i1, 0, 0)[0], i1 as f32);
        }
    }
}
