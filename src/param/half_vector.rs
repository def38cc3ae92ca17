use glam::Vec3A;

use crate::core::util;

use super::ParametrizationT;

/// Half-vector coordinates: `(inTheta, inPhi, halfTheta, halfPhi)`.
///
/// Axes 2/3 are the spherical angles of the half vector; the outgoing
/// direction is the incoming one mirrored about it.
#[derive(Clone, Copy, Default)]
pub struct HalfVector;

impl ParametrizationT for HalfVector {
    fn to_xyz(&self, angle0: f32, angle1: f32, angle2: f32, angle3: f32) -> (Vec3A, Vec3A) {
        let in_dir = util::spherical_to_xyz(angle0, angle1);
        let half_dir = util::spherical_to_xyz(angle2, angle3);

        let mut out_dir = util::reflect(in_dir, half_dir);
        util::fix_downward_dir(&mut out_dir);

        (in_dir, out_dir)
    }

    fn from_xyz(&self, in_dir: Vec3A, out_dir: Vec3A) -> [f32; 4] {
        let (in_theta, in_phi) = util::xyz_to_spherical(in_dir);

        let sum = in_dir + out_dir;
        let half_dir = if sum.length_squared() < 1e-12 {
            Vec3A::Z
        } else {
            sum.normalize()
        };
        let (half_theta, half_phi) = util::xyz_to_spherical(half_dir);

        [in_theta, in_phi, half_theta, half_phi]
    }

    fn max_angle0(&self) -> f32 {
        std::f32::consts::FRAC_PI_2
    }

    fn max_angle1(&self) -> f32 {
        2.0 * std::f32::consts::PI
    }

    fn max_angle2(&self) -> f32 {
        std::f32::consts::FRAC_PI_2
    }

    fn max_angle3(&self) -> f32 {
        2.0 * std::f32::consts::PI
    }
}
