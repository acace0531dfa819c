//! Collaborator seams between the capture loop and the viewer backend.

use image::RgbImage;

/// Produces one full-viewport raster frame on demand.
///
/// The backend is responsible for showing two full pages per frame at a
/// fixed pixel geometry matching the configured [`CaptureGeometry`].
///
/// [`CaptureGeometry`]: crate::capture::geometry::CaptureGeometry
pub trait FrameSource {
    fn frame(&mut self) -> crate::error::Result<RgbImage>;
}

/// Advances the viewer to the next two-page spread.
///
/// Assumed synchronous enough that a frame requested after the settle delay
/// reflects the new spread.
pub trait PageAdvancer {
    fn advance(&mut self) -> crate::error::Result<()>;
}
