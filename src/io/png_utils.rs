// Copyright @yucwang 2026

use super::ImageIoError;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use image::{Rgb, RgbImage};

fn to_byte(v: Float) -> u8 {
    (v.max(0.0).min(1.0) * 255.0).round() as u8
}

/// 8-bit preview of a linear bitmap. Values are clamped to `[0, 1]` with no
/// tone mapping, and the first bitmap row becomes the last image row.
pub fn bitmap_to_rgb8(bitmap: &Bitmap) -> RgbImage {
    let (width, height) = (bitmap.width(), bitmap.height());
    let mut img = RgbImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let p = bitmap[(x, y)];
            img.put_pixel(x as u32, (height - 1 - y) as u32, Rgb([to_byte(p[0]), to_byte(p[1]), to_byte(p[2])]));
        }
    }
    img
}

pub fn write_bitmap_to_png(bitmap: &Bitmap, file_path: &str) -> Result<(), ImageIoError> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(ImageIoError::EmptyImage);
    }
    bitmap_to_rgb8(bitmap).save(file_path)?;
    log::info!("PNG preview written to: {}.", file_path);
    Ok(())
}
