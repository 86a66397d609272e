// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::WangRng;
use crate::materials::{dielectric, lambertian_diffuse, metal};
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Surface response of a scene object. Each variant carries only the
/// parameters it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Diffuse { albedo: RGBSpectrum },
    /// `roughness` in `[0, 1]` scales the random perturbation of the mirror
    /// direction.
    Metal { albedo: RGBSpectrum, roughness: Float },
    Glass { ior: Float },
}

/// Outcome of a successful scatter: the continuation ray and the color it
/// carries back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterRecord {
    pub attenuation: RGBSpectrum,
    pub scattered: Ray3f,
}

impl ScatterRecord {
    pub fn new(attenuation: RGBSpectrum, scattered: Ray3f) -> Self {
        Self { attenuation, scattered }
    }
}

impl Material {
    pub fn name(&self) -> &'static str {
        match self {
            Material::Diffuse { .. } => "diffuse",
            Material::Metal { .. } => "metal",
            Material::Glass { .. } => "glass",
        }
    }

    /// Samples an outgoing ray for `ray_in` at `hit`. `None` means the path
    /// was absorbed.
    pub fn scatter(&self,
                   ray_in: &Ray3f,
                   hit: &SurfaceIntersection,
                   rng: &mut WangRng) -> Option<ScatterRecord> {
        match *self {
            Material::Diffuse { albedo } => Some(lambertian_diffuse::scatter(albedo, hit, rng)),
            Material::Metal { albedo, roughness } => metal::scatter(albedo, roughness, ray_in, hit, rng),
            Material::Glass { ior } => Some(dielectric::scatter(ior, ray_in, hit, rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    fn head_on_hit(material: Material) -> (Ray3f, SurfaceIntersection) {
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = SurfaceIntersection::from_outward_normal(&ray, Vector3f::zeros(),
                                                           Vector3f::new(0.0, 0.0, 1.0), 1.0)
            .with_material(material);
        (ray, hit)
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let mut rng = WangRng::new(17);

        let diffuse = Material::Diffuse { albedo: RGBSpectrum::new(0.7, 0.3, 0.3) };
        let (ray, hit) = head_on_hit(diffuse);
        let record = diffuse.scatter(&ray, &hit, &mut rng).expect("diffuse never absorbs");
        assert_eq!(record.attenuation, RGBSpectrum::new(0.7, 0.3, 0.3));

        let mirror = Material::Metal { albedo: RGBSpectrum::new(0.8, 0.8, 0.8), roughness: 0.0 };
        let (ray, hit) = head_on_hit(mirror);
        let record = mirror.scatter(&ray, &hit, &mut rng).expect("head-on mirror reflects");
        assert!((record.scattered.dir() - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-6);

        let glass = Material::Glass { ior: 1.5 };
        let (ray, hit) = head_on_hit(glass);
        let record = glass.scatter(&ray, &hit, &mut rng).expect("glass never absorbs");
        assert_eq!(record.attenuation, RGBSpectrum::white());
    }

    #[test]
    fn test_material_names() {
        assert_eq!(Material::Glass { ior: 1.0 }.name(), "glass");
        assert_eq!(Material::Diffuse { albedo: RGBSpectrum::white() }.name(), "diffuse");
        assert_eq!(Material::Metal { albedo: RGBSpectrum::white(), roughness: 0.1 }.name(), "metal");
    }
}
