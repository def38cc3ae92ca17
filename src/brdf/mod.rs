mod interpolation;

pub(crate) use interpolation::*;

use glam::Vec3A;

use crate::core::sample_set::SampleSet;
use crate::core::spectrum::{ColorModel, Spectrum};
use crate::core::util::is_full_round;
use crate::param::{Parametrization, ParametrizationT, Spherical, SpecularCentered};

/// A sample set bound to the parametrization that gives its axes meaning.
///
/// The view offers direction-indexed queries at grid points and continuous
/// (quadrilinearly interpolated) lookup between them.
#[derive(Clone)]
pub struct Brdf {
    sample_set: SampleSet,
    parametrization: Parametrization,
}

impl Brdf {
    pub fn new(
        num_angles0: usize,
        num_angles1: usize,
        num_angles2: usize,
        num_angles3: usize,
        color_model: ColorModel,
        num_wavelengths: usize,
        parametrization: Parametrization,
    ) -> Self {
        Self {
            sample_set: SampleSet::new(
                num_angles0,
                num_angles1,
                num_angles2,
                num_angles3,
                color_model,
                num_wavelengths,
            ),
            parametrization,
        }
    }

    pub fn from_sample_set(sample_set: SampleSet, parametrization: Parametrization) -> Self {
        Self {
            sample_set,
            parametrization,
        }
    }

    pub fn sample_set(&self) -> &SampleSet {
        &self.sample_set
    }

    pub fn sample_set_mut(&mut self) -> &mut SampleSet {
        &mut self.sample_set
    }

    pub fn into_sample_set(self) -> SampleSet {
        self.sample_set
    }

    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    /// Decodes the direction pair at a grid point.
    pub fn in_out_direction(&self, i0: usize, i1: usize, i2: usize, i3: usize) -> (Vec3A, Vec3A) {
        self.parametrization.to_xyz(
            self.sample_set.angle0(i0),
            self.sample_set.angle1(i1),
            self.sample_set.angle2(i2),
            self.sample_set.angle3(i3),
        )
    }

    /// Continuous lookup. The azimuthal axes wrap when they cover the full
    /// round; every other lookup clamps to the boundary samples.
    pub fn spectrum_at(&self, angle0: f32, angle1: f32, angle2: f32, angle3: f32) -> Spectrum {
        let period1 = if is_full_round(self.sample_set.angles1()) {
            Some(self.parametrization.max_angle1())
        } else {
            None
        };
        let period3 = if is_full_round(self.sample_set.angles3()) {
            Some(self.parametrization.max_angle3())
        } else {
            None
        };

        interpolate(
            &self.sample_set,
            [angle0, angle1, angle2, angle3],
            period1,
            period3,
        )
    }

    /// Continuous lookup for an explicit direction pair.
    pub fn spectrum_at_dirs(&self, in_dir: Vec3A, out_dir: Vec3A) -> Spectrum {
        let a = self.parametrization.from_xyz(in_dir, out_dir);
        self.spectrum_at(a[0], a[1], a[2], a[3])
    }
}

/// A BRDF in plain spherical coordinates, with accessors named for its
/// angles.
#[derive(Clone)]
pub struct SphericalBrdf {
    brdf: Brdf,
}

impl SphericalBrdf {
    pub fn new(
        num_in_theta: usize,
        num_in_phi: usize,
        num_out_theta: usize,
        num_out_phi: usize,
        color_model: ColorModel,
        num_wavelengths: usize,
    ) -> Self {
        Self {
            brdf: Brdf::new(
                num_in_theta,
                num_in_phi,
                num_out_theta,
                num_out_phi,
                color_model,
                num_wavelengths,
                Spherical.into(),
            ),
        }
    }

    pub fn brdf(&self) -> &Brdf {
        &self.brdf
    }

    pub fn brdf_mut(&mut self) -> &mut Brdf {
        &mut self.brdf
    }

    pub fn sample_set(&self) -> &SampleSet {
        self.brdf.sample_set()
    }

    pub fn sample_set_mut(&mut self) -> &mut SampleSet {
        self.brdf.sample_set_mut()
    }

    pub fn in_theta(&self, index: usize) -> f32 {
        self.sample_set().angle0(index)
    }
    pub fn in_phi(&self, index: usize) -> f32 {
        self.sample_set().angle1(index)
    }
    pub fn out_theta(&self, index: usize) -> f32 {
        self.sample_set().angle2(index)
    }
    pub fn out_phi(&self, index: usize) -> f32 {
        self.sample_set().angle3(index)
    }

    pub fn set_in_theta(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle0(index, angle);
    }
    pub fn set_in_phi(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle1(index, angle);
    }
    pub fn set_out_theta(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle2(index, angle);
    }
    pub fn set_out_phi(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle3(index, angle);
    }

    pub fn num_in_theta(&self) -> usize {
        self.sample_set().num_angles0()
    }
    pub fn num_in_phi(&self) -> usize {
        self.sample_set().num_angles1()
    }
    pub fn num_out_theta(&self) -> usize {
        self.sample_set().num_angles2()
    }
    pub fn num_out_phi(&self) -> usize {
        self.sample_set().num_angles3()
    }

    pub fn spectrum_at(
        &self,
        in_theta: f32,
        in_phi: f32,
        out_theta: f32,
        out_phi: f32,
    ) -> Spectrum {
        self.brdf.spectrum_at(in_theta, in_phi, out_theta, out_phi)
    }
}

/// A BRDF in specular-centered coordinates, with accessors named for its
/// angles.
#[derive(Clone)]
pub struct SpecularBrdf {
    brdf: Brdf,
}

impl SpecularBrdf {
    pub fn new(
        num_in_theta: usize,
        num_in_phi: usize,
        num_spec_theta: usize,
        num_spec_phi: usize,
        color_model: ColorModel,
        num_wavelengths: usize,
    ) -> Self {
        Self {
            brdf: Brdf::new(
                num_in_theta,
                num_in_phi,
                num_spec_theta,
                num_spec_phi,
                color_model,
                num_wavelengths,
                SpecularCentered.into(),
            ),
        }
    }

    pub fn brdf(&self) -> &Brdf {
        &self.brdf
    }

    pub fn brdf_mut(&mut self) -> &mut Brdf {
        &mut self.brdf
    }

    pub fn sample_set(&self) -> &SampleSet {
        self.brdf.sample_set()
    }

    pub fn sample_set_mut(&mut self) -> &mut SampleSet {
        self.brdf.sample_set_mut()
    }

    pub fn in_theta(&self, index: usize) -> f32 {
        self.sample_set().angle0(index)
    }
    pub fn in_phi(&self, index: usize) -> f32 {
        self.sample_set().angle1(index)
    }
    pub fn spec_theta(&self, index: usize) -> f32 {
        self.sample_set().angle2(index)
    }
    pub fn spec_phi(&self, index: usize) -> f32 {
        self.sample_set().angle3(index)
    }

    pub fn set_in_theta(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle0(index, angle);
    }
    pub fn set_in_phi(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle1(index, angle);
    }
    pub fn set_spec_theta(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle2(index, angle);
    }
    pub fn set_spec_phi(&mut self, index: usize, angle: f32) {
        self.sample_set_mut().set_angle3(index, angle);
    }

    pub fn num_in_theta(&self) -> usize {
        self.sample_set().num_angles0()
    }
    pub fn num_in_phi(&self) -> usize {
        self.sample_set().num_angles1()
    }
    pub fn num_spec_theta(&self) -> usize {
        self.sample_set().num_angles2()
    }
    pub fn num_spec_phi(&self) -> usize {
        self.sample_set().num_angles3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn equal_interval_axis(axis: &mut [f32], max_angle: f32) {
        let n = axis.len();
        for (i, a) in axis.iter_mut().enumerate() {
            *a = max_angle * i as f32 / (n - 1) as f32;
        }
    }

    fn constant_brdf(value: f32) -> SphericalBrdf {
        let mut brdf = SphericalBrdf::new(4, 1, 4, 5, ColorModel::Monochrome, 1);
        {
            let ss = brdf.sample_set_mut();
            equal_interval_axis(ss.angles0_mut(), FRAC_PI_2);
            equal_interval_axis(ss.angles2_mut(), FRAC_PI_2);
            equal_interval_axis(ss.angles3_mut(), 2.0 * PI);
            for sp in ss.spectra_mut() {
                sp.fill(value);
            }
        }
        brdf
    }

    #[test]
    fn interpolation_of_constant_grid_is_constant() {
        let brdf = constant_brdf(0.75);
        let sp = brdf.spectrum_at(0.31, 0.0, 0.9, 4.71);
        assert!((sp[0] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn grid_point_lookup_is_exact() {
        let mut brdf = constant_brdf(0.0);
        brdf.sample_set_mut()
            .set_spectrum(1, 0, 2, 3, Spectrum::filled(1, 2.0));
        let a0 = brdf.in_theta(1);
        let a2 = brdf.out_theta(2);
        let a3 = brdf.out_phi(3);
        let sp = brdf.spectrum_at(a0, 0.0, a2, a3);
        assert!((sp[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn directions_follow_parametrization() {
        let mut brdf = SphericalBrdf::new(2, 1, 2, 2, ColorModel::Rgb, 3);
        brdf.set_in_theta(1, 0.5);
        brdf.set_out_theta(1, 1.0);
        brdf.set_out_phi(1, PI);
        let (in_dir, out_dir) = brdf.brdf().in_out_direction(1, 0, 1, 1);
        assert!((in_dir.z - 0.5f32.cos()).abs() < 1e-6);
        assert!((out_dir.z - 1.0f32.cos()).abs() < 1e-6);
        assert!(out_dir.x < 0.0);
    }

    #[test]
    fn specular_view_centers_on_mirror_direction() {
        let mut brdf = SpecularBrdf::new(2, 1, 2, 2, ColorModel::Monochrome, 1);
        brdf.set_in_theta(1, 0.8);
        brdf.set_spec_theta(1, 0.3);
        brdf.set_spec_phi(1, PI);
        assert_eq!(brdf.num_spec_theta(), 2);

        // specTheta = 0 decodes to the perfect mirror of the incoming
        // direction regardless of specPhi.
        let (in_dir, out_dir) = brdf.brdf().in_out_direction(1, 0, 0, 0);
        let mirror = crate::core::util::reflect(in_dir, glam::Vec3A::Z);
        assert!((out_dir - mirror).length() < 1e-5);
    }

    #[test]
    fn periodic_lookup_wraps_azimuth() {
        let mut brdf = SphericalBrdf::new(1, 1, 1, 4, ColorModel::Monochrome, 1);
        {
            let ss = brdf.sample_set_mut();
            for (i, phi) in [0.0, 0.5 * PI, PI, 1.5 * PI].iter().enumerate() {
                ss.set_angle3(i, *phi);
            }
            ss.set_spectrum(0, 0, 0, 0, Spectrum::filled(1, 1.0));
        }
        // Halfway through the wrap-around gap between 3pi/2 and 2pi=0.
        let sp = brdf.spectrum_at(0.0, 0.0, 0.0, 1.75 * PI);
        assert!((sp[0] - 0.5).abs() < 1e-6);
    }
}
