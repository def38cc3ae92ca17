use glam::Vec3A;

/// Relative comparison scaled by the magnitude of the operands.
pub fn is_equal(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() <= f32::EPSILON * (lhs + rhs).abs()
}

/// Returns true if the elements of an array are equally-spaced intervals.
pub fn is_equal_interval(values: &[f32]) -> bool {
    if values.len() <= 1 {
        return false;
    }

    let interval = values[values.len() - 1] / (values.len() - 1) as f32;
    values
        .iter()
        .enumerate()
        .all(|(i, &v)| is_equal(v, interval * i as f32))
}

pub fn clamp(value: f32, min_value: f32, max_value: f32) -> f32 {
    value.max(min_value).min(max_value)
}

/// True if an azimuthal axis holds samples on both sides of the incident
/// plane, i.e. strictly inside (0, pi) and inside (pi, 2pi).
pub fn is_full_round(angles: &[f32]) -> bool {
    use std::f32::consts::PI;

    let mut contains_0_pi = false;
    let mut contains_pi_2pi = false;

    for &angle in angles {
        if angle > 0.0 && angle < PI {
            contains_0_pi = true;
        }
        if angle > PI && angle < 2.0 * PI {
            contains_pi_2pi = true;
        }
    }

    contains_0_pi && contains_pi_2pi
}

pub fn lerp(lhs: f32, rhs: f32, weight: f32) -> f32 {
    lhs + weight * (rhs - lhs)
}

/// Mirrors a direction about a normal.
pub fn reflect(dir: Vec3A, normal: Vec3A) -> Vec3A {
    2.0 * normal.dot(dir) * normal - dir
}

/// Converts polar and azimuthal angles to a unit vector, +z up.
pub fn spherical_to_xyz(theta: f32, phi: f32) -> Vec3A {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Converts a unit vector to polar and azimuthal angles with phi in [0, 2pi).
pub fn xyz_to_spherical(dir: Vec3A) -> (f32, f32) {
    let theta = clamp(dir.z, -1.0, 1.0).acos();
    let mut phi = dir.y.atan2(dir.x);
    if phi < 0.0 {
        phi += 2.0 * std::f32::consts::PI;
    }
    (theta, phi)
}

/// Pushes a direction with a negative Z-component back onto the upper hemisphere.
pub fn fix_downward_dir(dir: &mut Vec3A) {
    if dir.z < 0.0 {
        dir.z = 0.0;
        if dir.x == 0.0 && dir.y == 0.0 {
            dir.x = 1.0;
        } else {
            *dir = dir.normalize();
        }
    }
}

pub fn to_degrees(radians: f32) -> f32 {
    radians / std::f32::consts::PI * 180.0
}

pub fn to_radians(degrees: f32) -> f32 {
    degrees / 180.0 * std::f32::consts::PI
}
