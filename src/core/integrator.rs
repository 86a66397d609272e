// Copyright @yucwang 2026

use crate::core::rng::WangRng;
use crate::core::scene::Scene;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub trait Integrator: Sync {
    /// Radiance estimate carried back along `ray`.
    fn trace_ray_forward(&self, scene: &Scene, ray: Ray3f, rng: &mut WangRng) -> RGBSpectrum;
}
