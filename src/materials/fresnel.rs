// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

/// Mirrors the incoming direction `v` about `n`.
pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of the unit direction `uv` through the surface with
/// normal `n`, split into the parts perpendicular and parallel to `n`.
pub fn refract(uv: &Vector3f, n: &Vector3f, etai_over_etat: Float) -> Vector3f {
    let cos_theta = (-uv).dot(n).max(-1.0).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Schlick's approximation of dielectric reflectance.
pub fn schlick(cosine: Float, ref_idx: Float) -> Float {
    let r0 = (1.0 - ref_idx) / (1.0 + ref_idx);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
