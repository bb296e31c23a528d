//! Sample image decoding with resizing, and PNG export of generated grids

use crate::color::Color;
use crate::io::error::{AlgorithmError, Result, computation_error, invalid_parameter};
use crate::spatial::PixelGrid;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgb};
use std::path::Path;

/// Decode an image and resample it to exactly `width` x `height`
///
/// Alpha is discarded. Bilinear filtering is used, so the grid may contain
/// blended colours that never appear in the source file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The target dimensions are zero or do not fit in `u32`
pub fn load_pixel_grid<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<PixelGrid> {
    let path = path.as_ref();
    let (Ok(target_width), Ok(target_height)) = (u32::try_from(width), u32::try_from(height))
    else {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"must fit in 32 bits",
        ));
    };

    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let resized = img
        .resize_exact(target_width, target_height, FilterType::Triangle)
        .to_rgb8();

    let pixels = resized.pixels().map(|&pixel| Color::from(pixel)).collect();
    PixelGrid::from_raster(width, height, pixels)
}

/// Convert a grid into an RGB image buffer
///
/// # Errors
///
/// Returns an invalid parameter error if a grid dimension does not fit in
/// `u32`, the largest size an image buffer can hold.
pub fn grid_to_image(grid: &PixelGrid) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>> {
    let (width, height) = grid.dimensions();
    let (Ok(image_width), Ok(image_height)) = (u32::try_from(width), u32::try_from(height))
    else {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{width}x{height}"),
            &"must fit in 32 bits",
        ));
    };

    let raw: Vec<u8> = grid
        .as_array()
        .iter()
        .flat_map(|&color| <[u8; 3]>::from(color))
        .collect();

    ImageBuffer::from_raw(image_width, image_height, raw).ok_or_else(|| {
        computation_error("image conversion", &"pixel buffer does not match grid size")
    })
}

/// Export a grid as an opaque PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<P: AsRef<Path>>(grid: &PixelGrid, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    grid_to_image(grid)?
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
