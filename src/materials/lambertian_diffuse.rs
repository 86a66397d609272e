// Copyright @yucwang 2023

use crate::core::bsdf::ScatterRecord;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::WangRng;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

const DEGENERATE_LENGTH_SQUARED: f32 = 1e-12;

/// Cosine-weighted bounce: the normal plus a point on the unit sphere.
///
/// The sum can dip marginally below the tangent plane; that slight bias is
/// kept. Only the exact cancellation case falls back to the normal.
pub fn scatter(albedo: RGBSpectrum,
               hit: &SurfaceIntersection,
               rng: &mut WangRng) -> ScatterRecord {
    let normal = hit.normal();
    let mut direction = normal + rng.random_unit_vector();
    if direction.norm_squared() < DEGENERATE_LENGTH_SQUARED {
        direction = normal;
    }

    let scattered = Ray3f::new(hit.p(), direction.normalize(), None, None);
    ScatterRecord::new(albedo, scattered)
}
