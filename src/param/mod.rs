mod half_vector;
mod specular;
mod spherical;

pub use half_vector::*;
pub use specular::*;
pub use spherical::*;

use glam::Vec3A;

/// A convention by which four scalar angles encode an (incoming, outgoing)
/// direction pair. All angles are radians; directions are unit vectors with
/// the surface normal at +z.
#[enum_dispatch::enum_dispatch(Parametrization)]
pub trait ParametrizationT {
    /// Decodes four angles into an (incoming, outgoing) direction pair.
    fn to_xyz(&self, angle0: f32, angle1: f32, angle2: f32, angle3: f32) -> (Vec3A, Vec3A);

    /// Encodes a direction pair into the four angles of this convention.
    fn from_xyz(&self, in_dir: Vec3A, out_dir: Vec3A) -> [f32; 4];

    fn max_angle0(&self) -> f32;
    fn max_angle1(&self) -> f32;
    fn max_angle2(&self) -> f32;
    fn max_angle3(&self) -> f32;
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone, Copy)]
pub enum Parametrization {
    Spherical,
    SpecularCentered,
    HalfVector,
}

impl Parametrization {
    /// True for conventions whose axes 0/1 are the incoming polar and
    /// azimuthal angles, making the azimuth degenerate at `inTheta = 0`.
    pub fn has_incoming_polar_axes(&self) -> bool {
        matches!(
            self,
            Parametrization::Spherical(_) | Parametrization::SpecularCentered(_)
        )
    }
}
