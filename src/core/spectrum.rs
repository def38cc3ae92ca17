use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign};

use crate::core::color::Color;

/// How the channels of a spectrum are to be interpreted.
///
/// `Spectral` carries one channel per tabulated wavelength; the tristimulus
/// models fix the channel count and use a zero sentinel for wavelengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Spectral,
    Xyz,
    Rgb,
    Monochrome,
}

impl ColorModel {
    /// Channel count forced by the model, or `None` for `Spectral`.
    pub fn forced_num_wavelengths(&self) -> Option<usize> {
        match self {
            ColorModel::Spectral => None,
            ColorModel::Monochrome => Some(1),
            ColorModel::Xyz | ColorModel::Rgb => Some(3),
        }
    }
}

/// A finite vector of radiometric values, one per channel of the enclosing
/// color model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    values: Vec<f32>,
}

impl Spectrum {
    pub fn zero(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    pub fn filled(len: usize, value: f32) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    pub fn from_slice(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn resize(&mut self, len: usize) {
        self.values.resize(len, 0.0);
    }

    pub fn fill(&mut self, value: f32) {
        for v in &mut self.values {
            *v = value;
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    pub fn min_coeff(&self) -> f32 {
        self.values.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_coeff(&self) -> f32 {
        self.values
            .iter()
            .cloned()
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn cwise_min(&self, value: f32) -> Spectrum {
        Spectrum {
            values: self.values.iter().map(|v| v.min(value)).collect(),
        }
    }

    pub fn cwise_max(&self, value: f32) -> Spectrum {
        Spectrum {
            values: self.values.iter().map(|v| v.max(value)).collect(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    /// Tristimulus view of a 3-channel spectrum.
    pub fn to_color(&self) -> Color {
        debug_assert_eq!(self.values.len(), 3);
        Color::new(self.values[0], self.values[1], self.values[2])
    }
}

impl Index<usize> for Spectrum {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}
impl IndexMut<usize> for Spectrum {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.values[index]
    }
}

impl Add<&Spectrum> for &Spectrum {
    type Output = Spectrum;

    fn add(self, rhs: &Spectrum) -> Spectrum {
        debug_assert_eq!(self.values.len(), rhs.values.len());
        Spectrum {
            values: self
                .values
                .iter()
                .zip(&rhs.values)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}
impl AddAssign<&Spectrum> for Spectrum {
    fn add_assign(&mut self, rhs: &Spectrum) {
        debug_assert_eq!(self.values.len(), rhs.values.len());
        for (a, b) in self.values.iter_mut().zip(&rhs.values) {
            *a += b;
        }
    }
}

impl Mul<f32> for &Spectrum {
    type Output = Spectrum;

    fn mul(self, rhs: f32) -> Spectrum {
        Spectrum {
            values: self.values.iter().map(|v| v * rhs).collect(),
        }
    }
}
impl MulAssign<f32> for Spectrum {
    fn mul_assign(&mut self, rhs: f32) {
        for v in &mut self.values {
            *v *= rhs;
        }
    }
}

impl Div<f32> for &Spectrum {
    type Output = Spectrum;

    fn div(self, rhs: f32) -> Spectrum {
        Spectrum {
            values: self.values.iter().map(|v| v / rhs).collect(),
        }
    }
}
impl DivAssign<f32> for Spectrum {
    fn div_assign(&mut self, rhs: f32) {
        for v in &mut self.values {
            *v /= rhs;
        }
    }
}

impl From<Color> for Spectrum {
    fn from(color: Color) -> Self {
        Spectrum {
            values: vec![color.r, color.g, color.b],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_elementwise() {
        let mut sp = Spectrum::from_slice(&[1.0, 2.0, 3.0]);
        sp += &Spectrum::from_slice(&[0.5, 0.5, 0.5]);
        sp *= 2.0;
        assert_eq!(sp.values(), &[3.0, 5.0, 7.0]);
        sp /= 2.0;
        assert_eq!(sp.values(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn coefficient_extrema() {
        let sp = Spectrum::from_slice(&[-1.0, 4.0, 0.5]);
        assert_eq!(sp.min_coeff(), -1.0);
        assert_eq!(sp.max_coeff(), 4.0);
        assert_eq!(sp.cwise_max(0.0).values(), &[0.0, 4.0, 0.5]);
    }

    #[test]
    fn forced_wavelength_counts() {
        assert_eq!(ColorModel::Spectral.forced_num_wavelengths(), None);
        assert_eq!(ColorModel::Monochrome.forced_num_wavelengths(), Some(1));
        assert_eq!(ColorModel::Xyz.forced_num_wavelengths(), Some(3));
        assert_eq!(ColorModel::Rgb.forced_num_wavelengths(), Some(3));
    }
}
