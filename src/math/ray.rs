// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f, MAX_DIST, MIN_DIST};

/// A ray with the parameter interval it is allowed to hit in.
///
/// The direction is stored exactly as given. Producers normalize before
/// constructing, consumers that need a unit vector normalize again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d,
               min_t: min_t.unwrap_or(MIN_DIST),
               max_t: max_t.unwrap_or(MAX_DIST)}
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */
