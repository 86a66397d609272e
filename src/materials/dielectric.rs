// Copyright @yucwang 2026

use crate::core::bsdf::ScatterRecord;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::WangRng;
use crate::materials::fresnel::{reflect, refract, schlick};
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Smooth glass. Chooses between mirror reflection and refraction; total
/// internal reflection and the Schlick draw both fall back to reflection.
pub fn scatter(ior: Float,
               ray_in: &Ray3f,
               hit: &SurfaceIntersection,
               rng: &mut WangRng) -> ScatterRecord {
    let refraction_ratio = if hit.front_face() { 1.0 / ior } else { ior };

    let normal = hit.normal();
    let unit_direction = ray_in.dir().normalize();
    let cos_theta = (-unit_direction).dot(&normal).max(-1.0).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = refraction_ratio * sin_theta > 1.0;
    let direction = if cannot_refract || schlick(cos_theta, refraction_ratio) > rng.next_f32() {
        reflect(&unit_direction, &normal)
    } else {
        refract(&unit_direction, &normal, refraction_ratio)
    };

    ScatterRecord::new(RGBSpectrum::white(), Ray3f::new(hit.p(), direction, None, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    fn hit_from(origin: Vector3f, dir: Vector3f) -> (Ray3f, SurfaceIntersection) {
        let ray = Ray3f::new(origin, dir, None, None);
        let hit = SurfaceIntersection::from_outward_normal(&ray, Vector3f::zeros(),
                                                           Vector3f::new(0.0, 0.0, 1.0), 1.0);
        (ray, hit)
    }

    #[test]
    fn test_attenuation_is_white() {
        let (ray, hit) = hit_from(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.2, 0.0, -1.0));
        let mut rng = WangRng::new(11);
        for _ in 0..64 {
            assert_eq!(scatter(1.5, &ray, &hit, &mut rng).attenuation, RGBSpectrum::white());
        }
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass of ior 1.5 at 60 degrees exceeds the critical angle.
        let dir = Vector3f::new((0.75 as Float).sqrt(), 0.0, 0.5);
        let (ray, hit) = hit_from(Vector3f::new(0.0, 0.0, -1.0), dir);
        assert!(!hit.front_face());

        let mut rng = WangRng::new(5);
        for _ in 0..32 {
            let record = scatter(1.5, &ray, &hit, &mut rng);
            let out = record.scattered.dir();
            assert!(out.z < 0.0, "expected reflection back inside, got {:?}", out);
            assert!((out - reflect(&dir.normalize(), &hit.normal())).norm() < 1e-6);
        }
    }

    #[test]
    fn test_head_on_entry_mostly_refracts() {
        let (ray, hit) = hit_from(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0));
        let mut rng = WangRng::new(99);
        let mut transmitted = 0;
        let trials = 1000;
        for _ in 0..trials {
            if scatter(1.5, &ray, &hit, &mut rng).scattered.dir().z < 0.0 {
                transmitted += 1;
            }
        }
        // schlick(1, 1/1.5) = 0.04, so about 96% of samples pass through.
        assert!(transmitted > 900 && transmitted < trials, "transmitted {}", transmitted);
    }

    #[test]
    fn test_unit_ior_passes_straight_through() {
        let dir = Vector3f::new(0.3, 0.1, -1.0).normalize();
        let (ray, hit) = hit_from(Vector3f::new(0.0, 0.0, 1.0), dir);
        let mut rng = WangRng::new(1);
        for _ in 0..16 {
            let out = scatter(1.0, &ray, &hit, &mut rng).scattered.dir();
            let reflected = reflect(&dir, &hit.normal());
            let through = (out - dir).norm() < 1e-5;
            let mirrored = (out - reflected).norm() < 1e-5;
            assert!(through || mirrored);
        }
    }
}
