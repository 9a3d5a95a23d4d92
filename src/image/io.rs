//! Conversions between `image` crate buffers and chromasort pixel grids.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{OwnedRgb, RgbView};
use crate::util::{ChromaSortError, ChromaSortResult};
use std::path::Path;

/// Creates a borrowed view from an RGB image buffer.
pub fn view_from_rgb_image(img: &image::RgbImage) -> ChromaSortResult<RgbView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned grid from an RGB image buffer.
pub fn owned_from_rgb_image(img: &image::RgbImage) -> ChromaSortResult<OwnedRgb> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    OwnedRgb::new(img.as_raw().clone(), width, height)
}

/// Creates an owned RGB grid from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> ChromaSortResult<OwnedRgb> {
    let rgb = img.to_rgb8();
    owned_from_rgb_image(&rgb)
}

/// Loads an image from disk and converts it to an owned RGB grid.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> ChromaSortResult<OwnedRgb> {
    let img = image::open(path).map_err(|err| ChromaSortError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Converts an owned grid back into an `image` crate RGB buffer.
pub fn to_rgb_image(img: &OwnedRgb) -> ChromaSortResult<image::RgbImage> {
    image::RgbImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .ok_or_else(|| ChromaSortError::ImageIo {
            reason: "buffer length does not match dimensions".to_string(),
        })
}
