// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

const PARALLEL_LENGTH_SQUARED: Float = 1e-12;

/// Pinhole camera described by an explicit orthonormal basis, the block the
/// host uploads once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    fov_y: Float,
    aspect: Float,
    tan_half_fov_y: Float,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f,
               forward: Vector3f,
               up: Vector3f,
               right: Vector3f,
               fov_y_radians: Float,
               aspect: Float) -> Self {
        Self {
            origin,
            forward,
            right,
            up,
            fov_y: fov_y_radians,
            aspect,
            tan_half_fov_y: (0.5 * fov_y_radians).tan(),
        }
    }

    /// Builds the basis from a position, a point to look at and the world up
    /// vector. When the view is parallel to `world_up`, +z (or +x if the view
    /// also runs along z) stands in for it.
    pub fn look_at(origin: Vector3f,
                   target: Vector3f,
                   world_up: Vector3f,
                   fov_y_radians: Float,
                   aspect: Float) -> Self {
        let forward = (target - origin).normalize();
        let mut right = forward.cross(&world_up);
        if right.norm_squared() < PARALLEL_LENGTH_SQUARED {
            let fallback_up = if forward.z.abs() < 0.9 {
                Vector3f::new(0.0, 0.0, 1.0)
            } else {
                Vector3f::new(1.0, 0.0, 0.0)
            };
            right = forward.cross(&fallback_up);
        }
        let right = right.normalize();
        let up = right.cross(&forward).normalize();

        Self::new(origin, forward, up, right, fov_y_radians, aspect)
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn forward(&self) -> Vector3f {
        self.forward
    }

    pub fn right(&self) -> Vector3f {
        self.right
    }

    pub fn up(&self) -> Vector3f {
        self.up
    }

    pub fn fov_y(&self) -> Float {
        self.fov_y
    }

    pub fn aspect(&self) -> Float {
        self.aspect
    }
}

impl Sensor for PerspectiveCamera {
    fn sample_ray(&self, u: &Vector2f) -> Ray3f {
        let px = (2.0 * u.x - 1.0) * self.aspect * self.tan_half_fov_y;
        let py = (2.0 * u.y - 1.0) * self.tan_half_fov_y;

        let dir = (self.forward + self.right * px + self.up * py).normalize();
        Ray3f::new(self.origin, dir, None, None)
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera\n  origin: {:?}\n  forward: {:?}\n  fov_y: {}\n  aspect: {}",
                self.origin.as_slice(), self.forward.as_slice(), self.fov_y, self.aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vector3f, b: Vector3f) {
        assert!((a - b).norm() < 1e-5, "expected {:?} ~ {:?}", a, b);
    }

    #[test]
    fn test_perspective_camera_center_ray() {
        let origin = Vector3f::new(0.0, 0.0, 3.0);
        let target = Vector3f::new(0.0, 0.0, -1.0);
        let up = Vector3f::new(0.0, 1.0, 0.0);
        let cam = PerspectiveCamera::look_at(origin, target, up, std::f32::consts::FRAC_PI_2, 16.0 / 9.0);

        let ray = cam.sample_ray(&Vector2f::new(0.5, 0.5));
        assert_eq!(ray.origin(), origin);
        assert_vec_close(ray.dir(), Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_look_at_basis() {
        let cam = PerspectiveCamera::look_at(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0),
                                             Vector3f::new(0.0, 1.0, 0.0), 1.0, 1.0);
        assert_vec_close(cam.forward(), Vector3f::new(0.0, 0.0, -1.0));
        assert_vec_close(cam.right(), Vector3f::new(1.0, 0.0, 0.0));
        assert_vec_close(cam.up(), Vector3f::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_look_at_straight_up_or_down() {
        let world_up = Vector3f::new(0.0, 1.0, 0.0);
        for &target_y in [5.0 as Float, -5.0].iter() {
            let cam = PerspectiveCamera::look_at(Vector3f::zeros(), Vector3f::new(0.0, target_y, 0.0),
                                                 world_up, 1.0, 1.0);
            assert_vec_close(cam.forward(), Vector3f::new(0.0, target_y.signum(), 0.0));
            assert!((cam.right().norm() - 1.0).abs() < 1e-6);
            assert!((cam.up().norm() - 1.0).abs() < 1e-6);
            assert!(cam.right().dot(&cam.forward()).abs() < 1e-6);
            assert!(cam.up().dot(&cam.forward()).abs() < 1e-6);
            assert!(cam.up().dot(&cam.right()).abs() < 1e-6);

            let dir = cam.sample_ray(&Vector2f::new(0.5, 0.5)).dir();
            assert_vec_close(dir, cam.forward());
        }

        // Looking along z with +z as world up takes the second fallback.
        let cam = PerspectiveCamera::look_at(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 2.0),
                                             Vector3f::new(0.0, 0.0, 1.0), 1.0, 1.0);
        assert!(cam.right().iter().all(|c| c.is_finite()));
        assert!((cam.right().norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_ray_uses_aspect_and_fov() {
        let aspect = 2.0;
        let cam = PerspectiveCamera::look_at(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0),
                                             Vector3f::new(0.0, 1.0, 0.0), std::f32::consts::FRAC_PI_2, aspect);

        // tan(45 degrees) = 1, so the top-right corner sits at (aspect, 1, -1).
        let ray = cam.sample_ray(&Vector2f::new(1.0, 1.0));
        assert_vec_close(ray.dir(), Vector3f::new(aspect, 1.0, -1.0).normalize());

        let ray = cam.sample_ray(&Vector2f::new(0.0, 0.0));
        assert_vec_close(ray.dir(), Vector3f::new(-aspect, -1.0, -1.0).normalize());
    }

    #[test]
    fn test_sample_ray_is_normalized() {
        let cam = PerspectiveCamera::look_at(Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(-1.0, 0.0, -2.0),
                                             Vector3f::new(0.0, 1.0, 0.0), 0.8, 1.5);
        for i in 0..5 {
            for j in 0..5 {
                let u = Vector2f::new(i as Float / 4.0, j as Float / 4.0);
                assert!((cam.sample_ray(&u).dir().norm() - 1.0).abs() < 1e-5);
            }
        }
    }
}
