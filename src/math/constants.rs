/* Copyright 2020 @Yuchen Wong */

use nalgebra as na;

pub type Float = f32;

pub type Vector2f = na::Vector2<Float>;
pub type Vector3f = na::Vector3<Float>;
pub type Vector4f = na::Vector4<Float>;

pub const PI: Float = 3.14159265359;

// Accepted ray parameter interval. The lower bound keeps a scattered ray
// from re-hitting the surface it left.
pub const MIN_DIST: Float = 1e-4;
pub const MAX_DIST: Float = 1000.0;

// Largest float strictly below one.
pub const ONE_MINUS_EPSILON: Float = 1.0 - Float::EPSILON / 2.0;
