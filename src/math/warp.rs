// Copyright @yucwang 2023

use super::constants::{ PI, Float, Vector2f, Vector3f };

/// Maps `u` to the unit sphere: `u.x` picks the height, `u.y` the azimuth.
pub fn square_to_uniform_sphere(u: &Vector2f) -> Vector3f {
    let z: Float = u.x * 2.0 - 1.0;
    let a: Float = u.y * 2.0 * PI;
    let r: Float = (1.0 - z * z).max(0.0).sqrt();

    Vector3f::new(r * a.cos(), r * a.sin(), z)
}

/// Mirrors `v` through the origin unless it already lies on the side of
/// `normal`.
pub fn flip_to_hemisphere(v: Vector3f, normal: &Vector3f) -> Vector3f {
    if v.dot(normal) > 0.0 { v } else { -v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sphere_is_unit_length() {
        for i in 0..16 {
            for j in 0..16 {
                let u = Vector2f::new(i as Float / 15.0, j as Float / 16.0);
                let v = square_to_uniform_sphere(&u);
                assert!((v.norm() - 1.0).abs() < 1e-5, "{:?} -> {:?}", u, v);
            }
        }
    }

    #[test]
    fn test_uniform_sphere_poles() {
        let south = square_to_uniform_sphere(&Vector2f::new(0.0, 0.3));
        let north = square_to_uniform_sphere(&Vector2f::new(1.0, 0.7));
        assert!((south.z + 1.0).abs() < 1e-6);
        assert!((north.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_flip_to_hemisphere() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let below = Vector3f::new(0.6, -0.8, 0.0);
        let above = Vector3f::new(0.6, 0.8, 0.0);
        assert_eq!(flip_to_hemisphere(below, &n), -below);
        assert_eq!(flip_to_hemisphere(above, &n), above);
    }
}
