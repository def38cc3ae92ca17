use crate::core::sample_set::SampleSet;
use crate::core::spectrum::Spectrum;

/// One axis of a quadrilinear lookup: the two bracketing sample indices and
/// the blend weight toward the upper one.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisSegment {
    pub lower: usize,
    pub upper: usize,
    pub weight: f32,
}

impl AxisSegment {
    fn at_sample(index: usize) -> Self {
        Self {
            lower: index,
            upper: index,
            weight: 0.0,
        }
    }

    pub fn corners(&self) -> [(usize, f32); 2] {
        [(self.lower, 1.0 - self.weight), (self.upper, self.weight)]
    }
}

/// Bracketing segment on a sorted open axis. Queries outside the range
/// clamp to the nearest boundary sample.
pub(crate) fn find_segment(angles: &[f32], angle: f32) -> AxisSegment {
    let n = angles.len();
    if n == 1 || angle <= angles[0] {
        return AxisSegment::at_sample(0);
    }
    if angle >= angles[n - 1] {
        return AxisSegment::at_sample(n - 1);
    }

    let mut upper = 1;
    while angles[upper] < angle {
        upper += 1;
    }
    let lower = upper - 1;

    let span = angles[upper] - angles[lower];
    let weight = if span > 0.0 {
        (angle - angles[lower]) / span
    } else {
        0.0
    };
    AxisSegment {
        lower,
        upper,
        weight,
    }
}

/// Bracketing segment on a sorted full-round axis. Queries beyond the last
/// sample interpolate across the wrap-around gap back to the first one.
pub(crate) fn find_segment_periodic(angles: &[f32], angle: f32, period: f32) -> AxisSegment {
    let n = angles.len();
    if n == 1 {
        return AxisSegment::at_sample(0);
    }

    let mut angle = angle % period;
    if angle < 0.0 {
        angle += period;
    }

    if angle < angles[0] || angle > angles[n - 1] {
        let gap = period - angles[n - 1] + angles[0];
        let offset = if angle >= angles[n - 1] {
            angle - angles[n - 1]
        } else {
            angle + period - angles[n - 1]
        };
        let weight = if gap > 0.0 { offset / gap } else { 0.0 };
        return AxisSegment {
            lower: n - 1,
            upper: 0,
            weight,
        };
    }

    find_segment(angles, angle)
}

/// Quadrilinear interpolation over all four axes of a sample set.
///
/// `period1` and `period3` enable periodic wrapping on the azimuthal axes;
/// `None` clamps.
pub(crate) fn interpolate(
    ss: &SampleSet,
    angles: [f32; 4],
    period1: Option<f32>,
    period3: Option<f32>,
) -> Spectrum {
    let segment = |axis: &[f32], angle: f32, period: Option<f32>| match period {
        Some(p) => find_segment_periodic(axis, angle, p),
        None => find_segment(axis, angle),
    };

    let seg0 = find_segment(ss.angles0(), angles[0]);
    let seg1 = segment(ss.angles1(), angles[1], period1);
    let seg2 = find_segment(ss.angles2(), angles[2]);
    let seg3 = segment(ss.angles3(), angles[3], period3);

    let mut result = Spectrum::zero(ss.num_wavelengths());
    for (i0, w0) in seg0.corners() {
        if w0 == 0.0 {
            continue;
        }
        for (i1, w1) in seg1.corners() {
            if w1 == 0.0 {
                continue;
            }
            for (i2, w2) in seg2.corners() {
                if w2 == 0.0 {
                    continue;
                }
                for (i3, w3) in seg3.corners() {
                    if w3 == 0.0 {
                        continue;
                    }
                    let corner = ss.spectrum(i0, i1, i2, i3) * (w0 * w1 * w2 * w3);
                    result += &corner;
                }
            }
        }
    }

    result
}
