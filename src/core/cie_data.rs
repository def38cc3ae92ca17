//! CIE reference tables: the 1931 2-degree standard observer and the D65
//! illuminant, tabulated from 380 nm to 780 nm at 10 nm steps.

pub const MIN_WAVELENGTH: f32 = 380.0;
pub const MAX_WAVELENGTH: f32 = 780.0;
pub const NUM_WAVELENGTHS: usize = 41;

/// Color-matching functions (x-bar, y-bar, z-bar) per tabulation point.
pub const XYZ: [[f32; 3]; NUM_WAVELENGTHS] = [
    [0.0014, 0.0000, 0.0065],
    [0.0042, 0.0001, 0.0201],
    [0.0143, 0.0004, 0.0679],
    [0.0435, 0.0012, 0.2074],
    [0.1344, 0.0040, 0.6456],
    [0.2839, 0.0116, 1.3856],
    [0.3483, 0.0230, 1.7471],
    [0.3362, 0.0380, 1.7721],
    [0.2908, 0.0600, 1.6692],
    [0.1954, 0.0910, 1.2876],
    [0.0956, 0.1390, 0.8130],
    [0.0320, 0.2080, 0.4652],
    [0.0049, 0.3230, 0.2720],
    [0.0093, 0.5030, 0.1582],
    [0.0633, 0.7100, 0.0782],
    [0.1655, 0.8620, 0.0422],
    [0.2904, 0.9540, 0.0203],
    [0.4334, 0.9950, 0.0087],
    [0.5945, 0.9950, 0.0039],
    [0.7621, 0.9520, 0.0021],
    [0.9163, 0.8700, 0.0017],
    [1.0263, 0.7570, 0.0011],
    [1.0622, 0.6310, 0.0008],
    [1.0026, 0.5030, 0.0003],
    [0.8544, 0.3810, 0.0002],
    [0.6424, 0.2650, 0.0000],
    [0.4479, 0.1750, 0.0000],
    [0.2835, 0.1070, 0.0000],
    [0.1649, 0.0610, 0.0000],
    [0.0874, 0.0320, 0.0000],
    [0.0468, 0.0170, 0.0000],
    [0.0227, 0.0082, 0.0000],
    [0.0114, 0.0041, 0.0000],
    [0.0058, 0.0021, 0.0000],
    [0.0029, 0.0010, 0.0000],
    [0.0014, 0.0005, 0.0000],
    [0.0007, 0.0002, 0.0000],
    [0.0003, 0.0001, 0.0000],
    [0.0002, 0.0001, 0.0000],
    [0.0001, 0.0000, 0.0000],
    [0.0000, 0.0000, 0.0000],
];

/// Relative spectral power of the D65 illuminant per tabulation point,
/// normalized to 100 at 560 nm.
pub const D65: [f32; NUM_WAVELENGTHS] = [
    49.9755, 54.6482, 82.7549, 91.4860, 93.4318, 86.6823, 104.8650, 117.0080,
    117.8120, 114.8610, 115.9230, 108.8110, 109.3540, 107.8020, 104.7900,
    107.6890, 104.4050, 104.0460, 100.0000, 96.3342, 95.7880, 88.6856,
    90.0062, 89.5991, 87.6987, 83.2886, 83.6992, 80.0268, 80.2146, 82.2778,
    78.2842, 69.7213, 71.6091, 74.3490, 61.6040, 69.8856, 75.0870, 63.5927,
    46.4182, 66.8054, 63.3828,
];

/// The tabulation wavelength at a given row.
pub fn wavelength(index: usize) -> f32 {
    let step = (MAX_WAVELENGTH - MIN_WAVELENGTH) / (NUM_WAVELENGTHS - 1) as f32;
    MIN_WAVELENGTH + step * index as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulation_endpoints() {
        assert_eq!(wavelength(0), MIN_WAVELENGTH);
        assert_eq!(wavelength(NUM_WAVELENGTHS - 1), MAX_WAVELENGTH);
    }

    #[test]
    fn y_bar_peaks_near_555() {
        let peak = XYZ
            .iter()
            .enumerate()
            .max_by(|a, b| a.1[1].partial_cmp(&b.1[1]).unwrap())
            .unwrap()
            .0;
        let peak_wl = wavelength(peak);
        assert!(peak_wl >= 540.0 && peak_wl <= 560.0);
    }
}
