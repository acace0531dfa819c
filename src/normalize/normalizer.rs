//! Geometric normalization of a single page image.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::error::CaptureError;

/// Parameters of the normalization pipeline.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeConfig {
    /// Maximum output dimensions (the page envelope).
    pub envelope_width: u32,
    pub envelope_height: u32,
    /// Width of the left/right bands blanked from each page.
    pub border_size: u32,
}

/// Applies the two-step normalization: fit the page into the envelope, then
/// blank the left/right borders.
#[derive(Debug, Clone, Copy)]
pub struct ImageNormalizer {
    config: NormalizeConfig,
}

impl ImageNormalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        ImageNormalizer { config }
    }

    /// Run both normalization steps, unconditionally and in order.
    ///
    /// # Errors
    /// Returns `CaptureError::InvalidGeometry` when the (possibly resized)
    /// page is not wider than twice the border size, which would leave a
    /// zero- or negative-width page.
    pub fn normalize(&self, page: &RgbImage) -> crate::error::Result<RgbImage> {
        let fitted = self.fit_to_envelope(page);
        self.blank_borders(&fitted)
    }

    /// Scale the page down to fit the envelope, preserving aspect ratio.
    ///
    /// Pages already inside the envelope on both axes pass through
    /// unscaled. Lanczos3 resampling keeps large downscales free of
    /// aliasing artifacts.
    fn fit_to_envelope(&self, page: &RgbImage) -> RgbImage {
        let (width, height) = page.dimensions();
        let NormalizeConfig {
            envelope_width,
            envelope_height,
            ..
        } = self.config;

        if width <= envelope_width && height <= envelope_height {
            return page.clone();
        }

        let aspect_ratio = f64::from(width) / f64::from(height);
        let (new_width, new_height) = if aspect_ratio > 1.0 {
            // Wider than tall: width drives the scale.
            let w = envelope_width;
            let h = (f64::from(envelope_width) / aspect_ratio).round() as u32;
            (w, h)
        } else {
            let h = envelope_height;
            let w = (f64::from(envelope_height) * aspect_ratio).round() as u32;
            (w, h)
        };

        imageops::resize(page, new_width, new_height, FilterType::Lanczos3)
    }

    /// Discard a `border_size`-wide band from the left and right edges.
    ///
    /// The interior is cropped and laid onto a fresh white canvas of the
    /// reduced width, so the output is `2 * border_size` narrower and the
    /// border-adjacent content is gone for good. Height is unchanged.
    fn blank_borders(&self, page: &RgbImage) -> crate::error::Result<RgbImage> {
        let (width, height) = page.dimensions();
        let border = self.config.border_size;

        if width <= 2 * border {
            return Err(CaptureError::invalid_geometry(format!(
                "page width {width} leaves no content after removing 2x{border} px borders"
            )));
        }

        let new_width = width - 2 * border;
        let interior = imageops::crop_imm(page, border, 0, new_width, height).to_image();

        let mut canvas = RgbImage::from_pixel(new_width, height, Rgb([255, 255, 255]));
        imageops::replace(&mut canvas, &interior, 0, 0);

        Ok(canvas)
    }
}
