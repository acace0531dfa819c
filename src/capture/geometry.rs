//! Frame-coordinate geometry of the two-page spread.

use crate::config::settings::CaptureSettings;

/// Axis-aligned rectangle in frame pixel coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Bounds of the full two-page spread within a captured frame.
///
/// The spread splits at its horizontal midline into the left and right page
/// regions; the two regions are contiguous and together span the full
/// spread width.
#[derive(Debug, Clone, Copy)]
pub struct CaptureGeometry {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl CaptureGeometry {
    /// Frame x-coordinate of the spread's midline.
    pub fn split_x(&self) -> u32 {
        self.left + (self.right - self.left) / 2
    }

    pub fn page_left(&self) -> Region {
        Region {
            left: self.left,
            top: self.top,
            right: self.split_x(),
            bottom: self.bottom,
        }
    }

    pub fn page_right(&self) -> Region {
        Region {
            left: self.split_x(),
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }
}

impl From<&CaptureSettings> for CaptureGeometry {
    fn from(s: &CaptureSettings) -> Self {
        CaptureGeometry {
            top: s.top,
            left: s.left,
            bottom: s.bottom,
            right: s.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_geometry() -> CaptureGeometry {
        CaptureGeometry {
            top: 63,
            left: 704,
            bottom: 1781,
            right: 3136,
        }
    }

    #[test]
    fn test_page_regions_are_contiguous() {
        let geom = reference_geometry();
        assert_eq!(geom.page_left().right, geom.page_right().left);
    }

    #[test]
    fn test_page_regions_span_full_spread() {
        let geom = reference_geometry();
        assert_eq!(geom.page_left().left, geom.left);
        assert_eq!(geom.page_right().right, geom.right);
        assert_eq!(
            geom.page_left().width() + geom.page_right().width(),
            geom.right - geom.left
        );
    }

    #[test]
    fn test_reference_split() {
        let geom = reference_geometry();
        assert_eq!(geom.split_x(), 1920);
        assert_eq!(geom.page_left().width(), 1216);
        assert_eq!(geom.page_right().width(), 1216);
        assert_eq!(geom.page_left().height(), 1718);
    }

    #[test]
    fn test_odd_spread_width_differs_by_one() {
        let geom = CaptureGeometry {
            top: 0,
            left: 0,
            bottom: 100,
            right: 101,
        };
        let (l, r) = (geom.page_left(), geom.page_right());
        assert_eq!(l.width(), 50);
        assert_eq!(r.width(), 51);
        assert_eq!(l.right, r.left);
    }
}
