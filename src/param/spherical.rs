use glam::Vec3A;

use crate::core::util;

use super::ParametrizationT;

/// Plain spherical coordinates: `(inTheta, inPhi, outTheta, outPhi)`.
#[derive(Clone, Copy, Default)]
pub struct Spherical;

impl ParametrizationT for Spherical {
    fn to_xyz(&self, angle0: f32, angle1: f32, angle2: f32, angle3: f32) -> (Vec3A, Vec3A) {
        (
            util::spherical_to_xyz(angle0, angle1),
            util::spherical_to_xyz(angle2, angle3),
        )
    }

    fn from_xyz(&self, in_dir: Vec3A, out_dir: Vec3A) -> [f32; 4] {
        let (in_theta, in_phi) = util::xyz_to_spherical(in_dir);
        let (out_theta, out_phi) = util::xyz_to_spherical(out_dir);
        [in_theta, in_phi, out_theta, out_phi]
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
