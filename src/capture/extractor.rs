//! Frame -> (left page, right page) via fixed rectangular crops.

use image::RgbImage;
use image::imageops;

use crate::capture::geometry::{CaptureGeometry, Region};
use crate::error::CaptureError;

/// Splits a captured frame into the two visible page images.
///
/// Pure: holds only the configured geometry, no state between frames.
#[derive(Debug, Clone, Copy)]
pub struct PageExtractor {
    geometry: CaptureGeometry,
}

impl PageExtractor {
    pub fn new(geometry: CaptureGeometry) -> Self {
        PageExtractor { geometry }
    }

    /// Crop the left and right page regions out of `frame`.
    ///
    /// # Errors
    /// Returns `CaptureError::OutOfBounds` when the frame is smaller than
    /// the configured regions. A clipped crop would silently corrupt every
    /// page the job produces, so undersized frames fail hard.
    pub fn extract(&self, frame: &RgbImage) -> crate::error::Result<(RgbImage, RgbImage)> {
        let left = crop_region(frame, self.geometry.page_left())?;
        let right = crop_region(frame, self.geometry.page_right())?;
        Ok((left, right))
    }
}

fn crop_region(frame: &RgbImage, region: Region) -> crate::error::Result<RgbImage> {
    if region.right > frame.width() || region.bottom > frame.height() {
        return Err(CaptureError::out_of_bounds(format!(
            "region ({}, {})-({}, {}) exceeds frame {}x{}",
            region.left,
            region.top,
            region.right,
            region.bottom,
            frame.width(),
            frame.height()
        )));
    }

    Ok(imageops::crop_imm(
        frame,
        region.left,
        region.top,
        region.width(),
        region.height(),
    )
    .to_image())
}
