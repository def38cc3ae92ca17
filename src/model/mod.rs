pub mod util;

mod cook_torrance;
mod fresnel;
mod lambertian;
mod ward;

pub use cook_torrance::*;
pub use fresnel::*;
pub use lambertian::*;
pub use ward::*;

use glam::Vec3A;

/// An analytic reflectance model, evaluated per direction pair.
#[enum_dispatch::enum_dispatch(ReflectanceModel)]
pub trait ReflectanceModelT {
    /// BRDF value for the given incoming and outgoing directions, both
    /// unit vectors above the surface with the normal at +z.
    fn brdf_value(&self, in_dir: Vec3A, out_dir: Vec3A) -> f32;

    fn is_isotropic(&self) -> bool;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Named parameters for external introspection.
    fn parameters(&self) -> Vec<(&'static str, f32)>;
}

#[enum_dispatch::enum_dispatch]
pub enum ReflectanceModel {
    Lambertian,
    CookTorrance,
    WardAnisotropic,
}
