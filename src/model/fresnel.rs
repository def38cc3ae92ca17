/// Unpolarized Fresnel reflectance of a dielectric for light arriving at
/// `incident_angle` radians from the normal, entering from vacuum.
pub fn fresnel_reflection(incident_angle: f32, refractive_index: f32) -> f32 {
    let cos_i = incident_angle.cos();
    let sin_t = incident_angle.sin() / refractive_index;
    if sin_t >= 1.0 {
        return 1.0;
    }
    let cos_t = (1.0 - sin_t * sin_t).sqrt();

    let rs = (cos_i - refractive_index * cos_t) / (cos_i + refractive_index * cos_t);
    let rp = (cos_t - refractive_index * cos_i) / (cos_t + refractive_index * cos_i);
    (rs * rs + rp * rp) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_incidence_matches_closed_form() {
        let n = 1.5;
        let expected = ((n - 1.0) / (n + 1.0)) * ((n - 1.0) / (n + 1.0));
        assert!((fresnel_reflection(0.0, n) - expected).abs() < 1e-5);
    }

    #[test]
    fn grazing_incidence_approaches_one() {
        assert!(fresnel_reflection(1.57, 1.5) > 0.9);
    }
}
