/* Copyright 2020 @TwoCookingMice */

use super::ImageIoError;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Vector4f;

use exr::prelude::*;

// Rows are stored bottom-up in the bitmap and top-down in the file.
fn flip_row(height: usize, y: usize) -> usize {
    height - 1 - y
}

// Write EXR Image to file
pub fn write_bitmap_to_exr(bitmap: &Bitmap, file_path: &str) -> std::result::Result<(), ImageIoError> {
    let (width, height) = (bitmap.width(), bitmap.height());
    if width == 0 || height == 0 {
        return Err(ImageIoError::EmptyImage);
    }
    log::info!("Starting writing openexr images: {}.", file_path);

    write_rgb_file(file_path, width, height, |x, y| {
        let pixel = bitmap[(x, flip_row(height, y))];
        (pixel[0], pixel[1], pixel[2])
    })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}

// Read EXR Image from file
pub fn read_exr_to_bitmap(file_path: &str) -> std::result::Result<Bitmap, ImageIoError> {
    log::info!("Starting reading OpenEXR image from: {}.", file_path);

    let image = read()
        .no_deep_data()
        .largest_resolution_level()
        .rgba_channels(
            |resolution, _| Bitmap::new(resolution.width(), resolution.height()),
            |bitmap: &mut Bitmap, position, (r, g, b, _a): (f32, f32, f32, f32)| {
                let y = flip_row(bitmap.height(), position.y());
                bitmap[(position.x(), y)] = Vector4f::new(r, g, b, 1.0);
            },
        )
        .first_valid_layer()
        .all_attributes()
        .from_file(file_path)?;

    let bitmap = image.layer_data.channel_data.pixels;
    log::info!("OpenEXR loaded, width = {}, height = {}.", bitmap.width(), bitmap.height());
    Ok(bitmap)
}
