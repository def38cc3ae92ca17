use glam::Vec3A;

use crate::core::coord::Coordinate;
use crate::core::util;

use super::ParametrizationT;

/// Specular-centered coordinates: `(inTheta, inPhi, specTheta, specPhi)`.
///
/// Axes 2/3 locate the outgoing direction in a frame whose +z axis is the
/// perfect mirror direction of the incoming one, so `specTheta = 0` always
/// means ideal reflection.
#[derive(Clone, Copy, Default)]
pub struct SpecularCentered;

impl SpecularCentered {
    fn mirror_frame(in_theta: f32, in_phi: f32) -> Coordinate {
        // Tilting +z by inTheta after a half-turn in azimuth lands it on
        // the mirror of the incoming direction.
        Coordinate::from_zenith_azimuth(in_theta, in_phi + std::f32::consts::PI)
    }
}

impl ParametrizationT for SpecularCentered {
    fn to_xyz(&self, angle0: f32, angle1: f32, angle2: f32, angle3: f32) -> (Vec3A, Vec3A) {
        let in_dir = util::spherical_to_xyz(angle0, angle1);

        let frame = Self::mirror_frame(angle0, angle1);
        let mut out_dir = frame.to_world(util::spherical_to_xyz(angle2, angle3));
        util::fix_downward_dir(&mut out_dir);

        (in_dir, out_dir)
    }

    fn from_xyz(&self, in_dir: Vec3A, out_dir: Vec3A) -> [f32; 4] {
        let (in_theta, in_phi) = util::xyz_to_spherical(in_dir);

        let frame = Self::mirror_frame(in_theta, in_phi);
        let (spec_theta, spec_phi) = util::xyz_to_spherical(frame.to_local(out_dir));

        [in_theta, in_phi, spec_theta, spec_phi]
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
