// Copyright @yucwang 2023

use crate::core::bsdf::Material;
use crate::math::constants::{ Float, Vector3f };
use crate::math::ray::Ray3f;

/// A ray-surface hit. The normal always faces the side the ray came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    front_face: bool,
    material: Option<Material>,
}

impl SurfaceIntersection {
    /// Orients `outward_normal` against `ray` and records which side was hit.
    pub fn from_outward_normal(ray: &Ray3f,
                               new_p: Vector3f,
                               outward_normal: Vector3f,
                               new_t: Float) -> Self {
        let front_face = ray.dir().dot(&outward_normal) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { p: new_p, normal: normal.normalize(), t: new_t, front_face, material: None }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn front_face(&self) -> bool {
        self.front_face
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    pub fn with_material(&self, new_material: Material) -> Self {
        Self {
            material: Some(new_material),
            ..*self
        }
    }
}
