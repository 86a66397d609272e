// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::math::ray::Ray3f;

pub trait Shape: Send + Sync {
    /// Nearest hit inside the ray's `[min_t, max_t]` segment. The returned
    /// record carries no material; the scene attaches it.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection>;
    fn describe(&self) -> String {
        String::from("Shape")
    }
}
