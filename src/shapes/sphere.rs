// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

// Directions shorter than this cannot produce a meaningful root.
const MIN_DIR_LENGTH_SQUARED: Float = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let oc = ray.origin() - self.center;
        let a = ray.dir().dot(&ray.dir());
        if a < MIN_DIR_LENGTH_SQUARED {
            return None;
        }
        let half_b = oc.dot(&ray.dir());
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut root = (-half_b - sqrtd) / a;
        if !ray.test_segment(root) {
            root = (-half_b + sqrtd) / a;
            if !ray.test_segment(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(SurfaceIntersection::from_outward_normal(ray, p, outward_normal, root))
    }

    fn describe(&self) -> String {
        format!("Sphere {{ center: ({}, {}, {}), radius: {} }}",
                self.center.x, self.center.y, self.center.z, self.radius)
    }
}
