// Copyright @yucwang 2026

use crate::core::bsdf::ScatterRecord;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::WangRng;
use crate::materials::fresnel::reflect;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Fuzzy mirror. Returns `None` when the perturbed reflection ends up at or
/// below the tangent plane.
pub fn scatter(albedo: RGBSpectrum,
               roughness: Float,
               ray_in: &Ray3f,
               hit: &SurfaceIntersection,
               rng: &mut WangRng) -> Option<ScatterRecord> {
    let normal = hit.normal();
    let reflected = reflect(&ray_in.dir().normalize(), &normal);
    let direction = (reflected + roughness * rng.random_unit_vector()).normalize();

    if direction.dot(&normal) > 0.0 {
        Some(ScatterRecord::new(albedo, Ray3f::new(hit.p(), direction, None, None)))
    } else {
        None
    }
}
