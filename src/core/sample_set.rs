use crate::core::spectrum::{ColorModel, Spectrum};
use crate::core::util;

/// A four-dimensional grid of spectra indexed by four angle axes.
///
/// The set itself attaches no meaning to its axes; a parametrization bound
/// by a BRDF view does. Spectra are stored flat in row-major order.
/// The equal-interval and one-side flags are advisory caches and are only
/// refreshed by [`update_angle_attributes`](SampleSet::update_angle_attributes).
#[derive(Clone, Debug)]
pub struct SampleSet {
    angles0: Vec<f32>,
    angles1: Vec<f32>,
    angles2: Vec<f32>,
    angles3: Vec<f32>,
    wavelengths: Vec<f32>,
    spectra: Vec<Spectrum>,
    color_model: ColorModel,
    equal_interval_angles: [bool; 4],
    one_side: bool,
}

impl SampleSet {
    pub fn new(
        num_angles0: usize,
        num_angles1: usize,
        num_angles2: usize,
        num_angles3: usize,
        color_model: ColorModel,
        num_wavelengths: usize,
    ) -> Self {
        debug_assert!(
            num_angles0 > 0 && num_angles1 > 0 && num_angles2 > 0 && num_angles3 > 0
        );

        let mut ss = Self {
            angles0: Vec::new(),
            angles1: Vec::new(),
            angles2: Vec::new(),
            angles3: Vec::new(),
            wavelengths: Vec::new(),
            spectra: Vec::new(),
            color_model,
            equal_interval_angles: [false; 4],
            one_side: false,
        };
        ss.resize_angles(num_angles0, num_angles1, num_angles2, num_angles3);

        match color_model.forced_num_wavelengths() {
            // Tristimulus models use a zero sentinel for wavelengths.
            Some(n) => ss.resize_wavelengths(n),
            None => {
                debug_assert!(num_wavelengths > 0);
                ss.resize_wavelengths(num_wavelengths);
            }
        }

        ss
    }

    /// Reallocates the grid. Spectral contents are unspecified afterwards;
    /// the color model and wavelengths are preserved.
    pub fn resize_angles(
        &mut self,
        num_angles0: usize,
        num_angles1: usize,
        num_angles2: usize,
        num_angles3: usize,
    ) {
        debug_assert!(
            num_angles0 > 0 && num_angles1 > 0 && num_angles2 > 0 && num_angles3 > 0
        );

        self.angles0.resize(num_angles0, 0.0);
        self.angles1.resize(num_angles1, 0.0);
        self.angles2.resize(num_angles2, 0.0);
        self.angles3.resize(num_angles3, 0.0);

        let num_samples = num_angles0 * num_angles1 * num_angles2 * num_angles3;
        let num_wavelengths = self.wavelengths.len();
        self.spectra
            .resize(num_samples, Spectrum::zero(num_wavelengths));
    }

    /// Reallocates every spectrum to the given channel count. Values are
    /// unspecified afterwards.
    pub fn resize_wavelengths(&mut self, num_wavelengths: usize) {
        debug_assert!(num_wavelengths > 0);

        for sp in &mut self.spectra {
            sp.resize(num_wavelengths);
        }
        self.wavelengths.resize(num_wavelengths, 0.0);
    }

    fn index(&self, i0: usize, i1: usize, i2: usize, i3: usize) -> usize {
        debug_assert!(
            i0 < self.angles0.len()
                && i1 < self.angles1.len()
                && i2 < self.angles2.len()
                && i3 < self.angles3.len()
        );
        ((i0 * self.angles1.len() + i1) * self.angles2.len() + i2) * self.angles3.len() + i3
    }

    pub fn spectrum(&self, i0: usize, i1: usize, i2: usize, i3: usize) -> &Spectrum {
        &self.spectra[self.index(i0, i1, i2, i3)]
    }

    pub fn spectrum_mut(&mut self, i0: usize, i1: usize, i2: usize, i3: usize) -> &mut Spectrum {
        let index = self.index(i0, i1, i2, i3);
        &mut self.spectra[index]
    }

    pub fn set_spectrum(&mut self, i0: usize, i1: usize, i2: usize, i3: usize, sp: Spectrum) {
        debug_assert_eq!(sp.len(), self.wavelengths.len());
        let index = self.index(i0, i1, i2, i3);
        self.spectra[index] = sp;
    }

    pub fn spectra(&self) -> &[Spectrum] {
        &self.spectra
    }

    pub fn spectra_mut(&mut self) -> &mut [Spectrum] {
        &mut self.spectra
    }

    pub fn angle0(&self, index: usize) -> f32 {
        self.angles0[index]
    }
    pub fn angle1(&self, index: usize) -> f32 {
        self.angles1[index]
    }
    pub fn angle2(&self, index: usize) -> f32 {
        self.angles2[index]
    }
    pub fn angle3(&self, index: usize) -> f32 {
        self.angles3[index]
    }

    pub fn set_angle0(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.angles0[index] = angle;
    }
    pub fn set_angle1(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.angles1[index] = angle;
    }
    pub fn set_angle2(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.angles2[index] = angle;
    }
    pub fn set_angle3(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.angles3[index] = angle;
    }

    pub fn angles0(&self) -> &[f32] {
        &self.angles0
    }
    pub fn angles1(&self) -> &[f32] {
        &self.angles1
    }
    pub fn angles2(&self) -> &[f32] {
        &self.angles2
    }
    pub fn angles3(&self) -> &[f32] {
        &self.angles3
    }

    pub fn angles0_mut(&mut self) -> &mut [f32] {
        &mut self.angles0
    }
    pub fn angles1_mut(&mut self) -> &mut [f32] {
        &mut self.angles1
    }
    pub fn angles2_mut(&mut self) -> &mut [f32] {
        &mut self.angles2
    }
    pub fn angles3_mut(&mut self) -> &mut [f32] {
        &mut self.angles3
    }

    pub fn num_angles0(&self) -> usize {
        self.angles0.len()
    }
    pub fn num_angles1(&self) -> usize {
        self.angles1.len()
    }
    pub fn num_angles2(&self) -> usize {
        self.angles2.len()
    }
    pub fn num_angles3(&self) -> usize {
        self.angles3.len()
    }

    pub fn wavelength(&self, index: usize) -> f32 {
        self.wavelengths[index]
    }

    pub fn set_wavelength(&mut self, index: usize, wavelength: f32) {
        self.wavelengths[index] = wavelength;
    }

    pub fn wavelengths(&self) -> &[f32] {
        &self.wavelengths
    }

    pub fn wavelengths_mut(&mut self) -> &mut [f32] {
        &mut self.wavelengths
    }

    pub fn num_wavelengths(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn color_model(&self) -> ColorModel {
        self.color_model
    }

    pub fn set_color_model(&mut self, color_model: ColorModel) {
        self.color_model = color_model;
    }

    pub fn is_isotropic(&self) -> bool {
        self.angles1.len() == 1
    }

    /// Recomputes the equal-interval flags and the one-side flag. Must be
    /// called after axis mutation before either cache is consulted.
    pub fn update_angle_attributes(&mut self) {
        self.update_equal_interval_angles();
        self.update_one_side();
    }

    pub fn is_equal_interval_angles0(&self) -> bool {
        self.equal_interval_angles[0]
    }
    pub fn is_equal_interval_angles1(&self) -> bool {
        self.equal_interval_angles[1]
    }
    pub fn is_equal_interval_angles2(&self) -> bool {
        self.equal_interval_angles[2]
    }
    pub fn is_equal_interval_angles3(&self) -> bool {
        self.equal_interval_angles[3]
    }

    /// True if axis 3 does not cover both sides of the incident plane.
    pub fn is_one_side(&self) -> bool {
        self.one_side
    }

    fn update_equal_interval_angles(&mut self) {
        self.equal_interval_angles = [
            util::is_equal_interval(&self.angles0),
            util::is_equal_interval(&self.angles1),
            util::is_equal_interval(&self.angles2),
            util::is_equal_interval(&self.angles3),
        ];

        log::debug!(
            "equal-interval angles: {:?}",
            self.equal_interval_angles
        );
    }

    fn update_one_side(&mut self) {
        self.one_side = !util::is_full_round(&self.angles3);

        log::debug!("one-side: {}", self.one_side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn storage_matches_dimensions() {
        let ss = SampleSet::new(2, 3, 4, 5, ColorModel::Spectral, 7);
        assert_eq!(ss.spectra().len(), 2 * 3 * 4 * 5);
        assert!(ss.spectra().iter().all(|sp| sp.len() == 7));
        assert_eq!(ss.num_wavelengths(), 7);
    }

    #[test]
    fn tristimulus_models_force_channel_count() {
        let rgb = SampleSet::new(1, 1, 1, 1, ColorModel::Rgb, 9);
        assert_eq!(rgb.num_wavelengths(), 3);
        assert_eq!(rgb.wavelengths(), &[0.0, 0.0, 0.0]);

        let mono = SampleSet::new(1, 1, 1, 1, ColorModel::Monochrome, 9);
        assert_eq!(mono.num_wavelengths(), 1);
        assert_eq!(mono.wavelengths(), &[0.0]);
    }

    #[test]
    fn row_major_indexing() {
        let mut ss = SampleSet::new(2, 2, 2, 2, ColorModel::Monochrome, 1);
        ss.set_spectrum(1, 0, 1, 0, Spectrum::filled(1, 5.0));
        let flat = ((1 * 2 + 0) * 2 + 1) * 2 + 0;
        assert_eq!(ss.spectra()[flat][0], 5.0);
    }

    #[test]
    fn resize_angles_keeps_wavelengths() {
        let mut ss = SampleSet::new(2, 1, 2, 2, ColorModel::Spectral, 4);
        ss.wavelengths_mut().copy_from_slice(&[400.0, 500.0, 600.0, 700.0]);
        ss.resize_angles(3, 1, 3, 3);
        assert_eq!(ss.spectra().len(), 27);
        assert_eq!(ss.wavelengths(), &[400.0, 500.0, 600.0, 700.0]);
        assert!(ss.spectra().iter().all(|sp| sp.len() == 4));
    }

    #[test]
    fn angle_attribute_caches() {
        let mut ss = SampleSet::new(1, 1, 1, 5, ColorModel::Monochrome, 1);
        for (i, &phi) in [0.0, 0.25 * PI, 0.5 * PI, 0.75 * PI, PI].iter().enumerate() {
            ss.set_angle3(i, phi);
        }
        ss.update_angle_attributes();
        assert!(ss.is_equal_interval_angles3());
        assert!(ss.is_one_side());

        ss.set_angle3(3, 1.5 * PI);
        // Stale until explicitly recomputed.
        assert!(ss.is_equal_interval_angles3());
        ss.update_angle_attributes();
        assert!(!ss.is_equal_interval_angles3());
        assert!(!ss.is_one_side());
    }

    #[test]
    fn isotropy_is_a_single_azimuth_column() {
        assert!(SampleSet::new(4, 1, 4, 4, ColorModel::Rgb, 3).is_isotropic());
        assert!(!SampleSet::new(4, 2, 4, 4, ColorModel::Rgb, 3).is_isotropic());
    }
}
