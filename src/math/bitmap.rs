// Copyright 2020 @TwoCookingMice

use super::constants::Vector4f;

use std::ops;
use std::vec::Vec;

/// Row-major RGBA float image. Row 0 is the bottom of the picture, the
/// same convention the kernel uses for its `v` coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    data: Vec<Vector4f>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector4f;

    fn index(&self, index: (usize, usize)) -> &Vector4f {
        assert!(index.0 < self.width && index.1 < self.height,
                "pixel ({}, {}) outside {}x{}", index.0, index.1, self.width, self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector4f {
        assert!(index.0 < self.width && index.1 < self.height,
                "pixel ({}, {}) outside {}x{}", index.0, index.1, self.width, self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(Vector4f::zeros(); pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

/* Test for Bitmap */
