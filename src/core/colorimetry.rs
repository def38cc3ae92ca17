//! Spectrum to tristimulus conversions under the D65 illuminant.

use crate::core::cie_data;
use crate::core::color::Color;

lazy_static! {
    /// sRGB of an all-ones spectrum over the CIE tabulation grid. Dividing
    /// by it makes a uniform unit reflectance map to white.
    static ref NORMALIZING_CONSTANT_SRGB: Color = {
        let ones = vec![1.0; cie_data::NUM_WAVELENGTHS];
        let wavelengths: Vec<f32> = (0..cie_data::NUM_WAVELENGTHS)
            .map(cie_data::wavelength)
            .collect();
        xyz_to_srgb(spectrum_to_xyz(&ones, &wavelengths))
    };
}

/// Index of the tabulation point closest to a wavelength. Out-of-range
/// wavelengths clamp to the first or last row.
pub fn find_nearest_index(wavelength: f32) -> usize {
    let ratio = (wavelength - cie_data::MIN_WAVELENGTH)
        / (cie_data::MAX_WAVELENGTH - cie_data::MIN_WAVELENGTH);
    let index = (cie_data::NUM_WAVELENGTHS as f32 * ratio) as isize;
    index.max(0).min(cie_data::NUM_WAVELENGTHS as isize - 1) as usize
}

/// Integrates a spectrum against the standard observer and D65 with the
/// trapezoidal rule. No resampling: each sample uses the nearest CIE row.
pub fn spectrum_to_xyz(values: &[f32], wavelengths: &[f32]) -> Color {
    debug_assert_eq!(values.len(), wavelengths.len());
    debug_assert!(!values.is_empty());

    let weighted = |i: usize| -> Color {
        let index = find_nearest_index(wavelengths[i]);
        let cmf = Color::from(cie_data::XYZ[index]);
        cmf * (cie_data::D65[index] * values[i])
    };

    let mut prev_wl = wavelengths[0];
    let mut prev_xyz = weighted(0);

    let mut sum = [0.0f64; 3];
    for i in 1..values.len() {
        let wl = wavelengths[i];
        let xyz = weighted(i);

        let area = (wl - prev_wl) * (prev_xyz + xyz);
        sum[0] += area.r as f64;
        sum[1] += area.g as f64;
        sum[2] += area.b as f64;

        prev_wl = wl;
        prev_xyz = xyz;
    }

    Color::new(
        (sum[0] / 2.0) as f32,
        (sum[1] / 2.0) as f32,
        (sum[2] / 2.0) as f32,
    )
}

/// CIE-XYZ to linear sRGB (ITU-R BT.709 primaries, no gamma).
pub fn xyz_to_srgb(xyz: Color) -> Color {
    Color::new(
        3.2404542 * xyz.r - 1.5371385 * xyz.g - 0.4985314 * xyz.b,
        -0.9692660 * xyz.r + 1.8760108 * xyz.g + 0.0415560 * xyz.b,
        0.0556434 * xyz.r - 0.2040259 * xyz.g + 1.0572252 * xyz.b,
    )
}

/// Radiometric spectrum to normalized linear sRGB. Negative values are
/// clamped before normalization.
pub fn spectrum_to_srgb(values: &[f32], wavelengths: &[f32]) -> Color {
    let rgb = xyz_to_srgb(spectrum_to_xyz(values, wavelengths));
    rgb.cwise_max(0.0) / *NORMALIZING_CONSTANT_SRGB
}

/// Display color of a single wavelength, scaled so the largest channel is
/// one. Intended for color-coding plots, not for radiometric use.
pub fn wavelength_to_srgb(wavelength: f32) -> Color {
    let index = find_nearest_index(wavelength);
    let rgb = xyz_to_srgb(Color::from(cie_data::XYZ[index]));
    let rgb = rgb.clamp(0.0, 1.0);
    rgb / rgb.max_coeff().max(0.001)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cie_data::{MAX_WAVELENGTH, MIN_WAVELENGTH, NUM_WAVELENGTHS};

    #[test]
    fn nearest_index_clamps() {
        assert_eq!(find_nearest_index(MIN_WAVELENGTH), 0);
        assert_eq!(find_nearest_index(MAX_WAVELENGTH), NUM_WAVELENGTHS - 1);
        assert_eq!(find_nearest_index(0.0), 0);
        assert_eq!(find_nearest_index(10000.0), NUM_WAVELENGTHS - 1);
    }

    #[test]
    fn uniform_spectrum_is_white() {
        let ones = vec![1.0; NUM_WAVELENGTHS];
        let wavelengths: Vec<f32> = (0..NUM_WAVELENGTHS).map(cie_data::wavelength).collect();
        let rgb = spectrum_to_srgb(&ones, &wavelengths);
        assert!((rgb.r - 1.0).abs() < 1e-6);
        assert!((rgb.g - 1.0).abs() < 1e-6);
        assert!((rgb.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn conversion_is_linear() {
        let wavelengths: Vec<f32> = (0..NUM_WAVELENGTHS).map(cie_data::wavelength).collect();
        let sp: Vec<f32> = (0..NUM_WAVELENGTHS).map(|i| 0.2 + 0.01 * i as f32).collect();
        let scaled: Vec<f32> = sp.iter().map(|v| v * 3.0).collect();

        let a = xyz_to_srgb(spectrum_to_xyz(&sp, &wavelengths));
        let b = xyz_to_srgb(spectrum_to_xyz(&scaled, &wavelengths));
        assert!((b.r - 3.0 * a.r).abs() < 1e-3 * a.r.abs().max(1.0));
        assert!((b.g - 3.0 * a.g).abs() < 1e-3 * a.g.abs().max(1.0));
        assert!((b.b - 3.0 * a.b).abs() < 1e-3 * a.b.abs().max(1.0));
    }

    #[test]
    fn d65_white_point_maps_to_unit_rgb() {
        let rgb = xyz_to_srgb(Color::new(0.95047, 1.0, 1.08883));
        assert!((rgb.r - 1.0).abs() < 1e-3);
        assert!((rgb.g - 1.0).abs() < 1e-3);
        assert!((rgb.b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn pure_wavelength_peaks_at_one() {
        let rgb = wavelength_to_srgb(550.0);
        assert!((rgb.max_coeff() - 1.0).abs() < 1e-6);
        assert!(rgb.min_coeff() >= 0.0);
    }
}
