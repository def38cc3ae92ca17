use glam::{Mat3A, Vec3A};

/// Rotation between the global frame and a frame whose +z axis has been
/// tilted by `zenith` about +y and swung by `azimuth` about +z.
///
/// Used by parametrizations that measure the outgoing direction relative to
/// a derived axis such as the perfect mirror direction.
#[derive(Copy, Clone)]
pub struct Coordinate {
    local_to_world: Mat3A,
    world_to_local: Mat3A,
}

impl Coordinate {
    pub fn from_zenith_azimuth(zenith: f32, azimuth: f32) -> Self {
        let local_to_world = Mat3A::from_rotation_z(azimuth) * Mat3A::from_rotation_y(zenith);
        let world_to_local = local_to_world.transpose();
        Self {
            local_to_world,
            world_to_local,
        }
    }

    pub fn to_local(&self, world: Vec3A) -> Vec3A {
        self.world_to_local * world
    }

    pub fn to_world(&self, local: Vec3A) -> Vec3A {
        self.local_to_world * local
    }
}
