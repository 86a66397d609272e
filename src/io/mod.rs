// Copyright @yucwang 2026

pub mod exr_utils;
pub mod png_utils;

use std::fmt;

#[derive(Debug)]
pub enum ImageIoError {
    Exr(exr::error::Error),
    Image(image::ImageError),
    EmptyImage,
}

impl From<exr::error::Error> for ImageIoError {
    fn from(err: exr::error::Error) -> Self {
        ImageIoError::Exr(err)
    }
}

impl From<image::ImageError> for ImageIoError {
    fn from(err: image::ImageError) -> Self {
        ImageIoError::Image(err)
    }
}

impl fmt::Display for ImageIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageIoError::Exr(e) => write!(f, "exr: {}", e),
            ImageIoError::Image(e) => write!(f, "image: {}", e),
            ImageIoError::EmptyImage => write!(f, "refusing to write an empty image"),
        }
    }
}

impl std::error::Error for ImageIoError {}
