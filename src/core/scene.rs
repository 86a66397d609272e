// Copyright @yucwang 2026

use crate::core::bsdf::Material;
use crate::core::interaction::SurfaceIntersection;
use crate::core::shape::Shape;
use crate::math::constants::Vector3f;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::sphere::Sphere;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Arc<dyn Shape>,
    pub material: Material,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Arc<dyn Shape>, material: Material) -> Self {
        Self { shape, material, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }
}

/// Immutable list of objects, tested in insertion order.
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    pub fn with_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit over all objects. A later object replaces the current
    /// best only when strictly closer, so ties keep the earlier one.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut closest_so_far = ray.max_t;
        let mut result = None;

        for object in &self.objects {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                if hit.t() < closest_so_far {
                    closest_so_far = hit.t();
                    result = Some(hit.with_material(object.material));
                }
            }
        }

        result
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Three unit spheres in a row (diffuse, metal, glass) resting above a
/// large dark ground sphere.
pub fn default_scene() -> Scene {
    let sphere = |x: f32| Arc::new(Sphere::new(Vector3f::new(x, 0.0, -3.0), 1.0));

    Scene::with_objects(vec![
        SceneObject::new(sphere(-2.0), Material::Diffuse { albedo: RGBSpectrum::new(0.7, 0.3, 0.3) })
            .with_name(String::from("diffuse")),
        SceneObject::new(sphere(0.0), Material::Metal { albedo: RGBSpectrum::new(0.8, 0.8, 0.8), roughness: 0.1 })
            .with_name(String::from("metal")),
        SceneObject::new(sphere(2.0), Material::Glass { ior: 1.0 })
            .with_name(String::from("glass")),
        SceneObject::new(Arc::new(Sphere::new(Vector3f::new(0.0, -1001.0, -3.0), 1000.0)),
                         Material::Diffuse { albedo: RGBSpectrum::new(0.1, 0.1, 0.1) })
            .with_name(String::from("ground")),
    ])
}
