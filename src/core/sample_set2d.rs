use crate::core::spectrum::{ColorModel, Spectrum};
use crate::core::util;

/// A (theta, phi) grid of spectra for per-incoming-direction quantities
/// such as directional-hemispherical reflectance.
#[derive(Clone, Debug)]
pub struct SampleSet2D {
    theta_angles: Vec<f32>,
    phi_angles: Vec<f32>,
    wavelengths: Vec<f32>,
    spectra: Vec<Spectrum>,
    color_model: ColorModel,
    equal_interval_theta: bool,
    equal_interval_phi: bool,
}

impl SampleSet2D {
    pub fn new(
        num_theta: usize,
        num_phi: usize,
        color_model: ColorModel,
        num_wavelengths: usize,
    ) -> Self {
        debug_assert!(num_theta > 0 && num_phi > 0);

        let num_wavelengths = color_model
            .forced_num_wavelengths()
            .unwrap_or(num_wavelengths);
        debug_assert!(num_wavelengths > 0);

        Self {
            theta_angles: vec![0.0; num_theta],
            phi_angles: vec![0.0; num_phi],
            wavelengths: vec![0.0; num_wavelengths],
            spectra: vec![Spectrum::zero(num_wavelengths); num_theta * num_phi],
            color_model,
            equal_interval_theta: false,
            equal_interval_phi: false,
        }
    }

    fn index(&self, theta_index: usize, phi_index: usize) -> usize {
        debug_assert!(theta_index < self.theta_angles.len() && phi_index < self.phi_angles.len());
        theta_index * self.phi_angles.len() + phi_index
    }

    pub fn spectrum(&self, theta_index: usize, phi_index: usize) -> &Spectrum {
        &self.spectra[self.index(theta_index, phi_index)]
    }

    pub fn set_spectrum(&mut self, theta_index: usize, phi_index: usize, sp: Spectrum) {
        debug_assert_eq!(sp.len(), self.wavelengths.len());
        let index = self.index(theta_index, phi_index);
        self.spectra[index] = sp;
    }

    pub fn theta(&self, index: usize) -> f32 {
        self.theta_angles[index]
    }
    pub fn phi(&self, index: usize) -> f32 {
        self.phi_angles[index]
    }

    pub fn set_theta(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.theta_angles[index] = angle;
    }
    pub fn set_phi(&mut self, index: usize, angle: f32) {
        debug_assert!(angle.is_finite() && angle >= 0.0);
        self.phi_angles[index] = angle;
    }

    pub fn theta_angles_mut(&mut self) -> &mut [f32] {
        &mut self.theta_angles
    }
    pub fn phi_angles_mut(&mut self) -> &mut [f32] {
        &mut self.phi_angles
    }

    pub fn num_theta(&self) -> usize {
        self.theta_angles.len()
    }
    pub fn num_phi(&self) -> usize {
        self.phi_angles.len()
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

    pub fn check_equal_interval_angles(&mut self) {
        self.equal_interval_theta = util::is_equal_interval(&self.theta_angles);
        self.equal_interval_phi = util::is_equal_interval(&self.phi_angles);

        log::debug!(
            "equal-interval theta: {}, phi: {}",
            self.equal_interval_theta,
            self.equal_interval_phi
        );
    }

    pub fn is_equal_interval_theta(&self) -> bool {
        self.equal_interval_theta
    }
    pub fn is_equal_interval_phi(&self) -> bool {
        self.equal_interval_phi
    }

    /// Clamps theta into [0, pi/2] and phi into [0, 2pi].
    pub fn clamp_angles(&mut self) {
        use std::f32::consts::{FRAC_PI_2, PI};

        for theta in &mut self.theta_angles {
            *theta = util::clamp(*theta, 0.0, FRAC_PI_2);
        }
        for phi in &mut self.phi_angles {
            *phi = util::clamp(*phi, 0.0, 2.0 * PI);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn grid_dimensions() {
        let ss = SampleSet2D::new(3, 4, ColorModel::Spectral, 5);
        assert_eq!(ss.num_theta(), 3);
        assert_eq!(ss.num_phi(), 4);
        assert_eq!(ss.num_wavelengths(), 5);
    }

    #[test]
    fn clamp_angles_limits_ranges() {
        let mut ss = SampleSet2D::new(2, 2, ColorModel::Rgb, 3);
        ss.set_theta(0, 2.0);
        ss.set_phi(1, 7.0);
        ss.clamp_angles();
        assert_eq!(ss.theta(0), FRAC_PI_2);
        assert_eq!(ss.phi(1), 2.0 * PI);
    }
}
