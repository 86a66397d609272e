// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::WangRng;
use crate::core::scene::Scene;
use crate::emitters::sky::SkyGradient;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

pub const MAX_BOUNCES: u32 = 100;
pub const THROUGHPUT_CUTOFF: Float = 0.01;
pub const EXHAUSTED_SCALE: Float = 0.1;

/// Plain path tracer lit only by the sky. Paths stop on escape, on
/// absorption, once the throughput falls under `throughput_cutoff`, or when
/// `max_bounces` runs out.
pub struct PathIntegrator {
    pub max_bounces: u32,
    pub throughput_cutoff: Float,
    /// Weight applied to the throughput of a path that never escaped. This
    /// is biased, but bounds the cost of trapped paths.
    pub exhausted_scale: Float,
    sky: SkyGradient,
}

impl PathIntegrator {
    pub fn new(max_bounces: u32) -> Self {
        Self {
            max_bounces,
            throughput_cutoff: THROUGHPUT_CUTOFF,
            exhausted_scale: EXHAUSTED_SCALE,
            sky: SkyGradient::default(),
        }
    }

    pub fn sky(&self) -> &SkyGradient {
        &self.sky
    }
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self::new(MAX_BOUNCES)
    }
}

impl Integrator for PathIntegrator {
    fn trace_ray_forward(&self, scene: &Scene, ray: Ray3f, rng: &mut WangRng) -> RGBSpectrum {
        let mut attenuation = RGBSpectrum::white();
        let mut ray = ray;

        for _ in 0..self.max_bounces {
            let intersection = match scene.ray_intersection(&ray) {
                Some(h) => h,
                None => return attenuation * self.sky.eval(&ray.dir()),
            };

            let material = match intersection.material() {
                Some(m) => m,
                None => return RGBSpectrum::default(),
            };

            let record = match material.scatter(&ray, &intersection, rng) {
                Some(r) => r,
                None => return RGBSpectrum::default(),
            };

            attenuation *= record.attenuation;
            ray = record.scattered;

            if attenuation.max_component() < self.throughput_cutoff {
                return RGBSpectrum::default();
            }
        }

        attenuation * self.exhausted_scale
    }
}
