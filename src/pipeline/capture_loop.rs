//! Per-iteration loop: settle -> capture -> extract -> normalize -> persist
//! -> advance.

use std::time::Duration;

use tracing::debug;

use crate::capture::extractor::PageExtractor;
use crate::capture::source::{FrameSource, PageAdvancer};
use crate::normalize::ImageNormalizer;
use crate::storage::PageStore;

/// Drives the viewer through `iterations` spreads, persisting two
/// normalized pages per spread.
pub struct CaptureLoop {
    extractor: PageExtractor,
    normalizer: ImageNormalizer,
    settle_delay: Duration,
}

impl CaptureLoop {
    pub fn new(
        extractor: PageExtractor,
        normalizer: ImageNormalizer,
        settle_delay: Duration,
    ) -> Self {
        CaptureLoop {
            extractor,
            normalizer,
            settle_delay,
        }
    }

    /// Run the full capture sequence against `viewer`.
    ///
    /// Iteration `i` yields page numbers `2i+1` and `2i+2`; a completed run
    /// has written exactly `1..=2*iterations` with no gaps. Any stage
    /// failure aborts immediately, carrying the iteration and stage name —
    /// a failed capture invalidates the page numbering of everything after
    /// it, so there is no retry or skip-and-continue.
    ///
    /// Returns the number of pages written.
    pub fn run<V>(
        &self,
        viewer: &mut V,
        store: &PageStore,
        iterations: u32,
    ) -> crate::error::Result<u32>
    where
        V: FrameSource + PageAdvancer,
    {
        let mut pages_written = 0;

        for i in 0..iterations {
            // The viewer renders asynchronously with no completion signal;
            // a fixed settle delay stands in for one.
            std::thread::sleep(self.settle_delay);

            let left_number = 2 * i + 1;
            let right_number = 2 * i + 2;
            debug!(iteration = i, left_number, right_number, "capturing spread");

            let frame = viewer.frame().map_err(|e| e.at_stage(i, "capture"))?;

            let (left, right) = self
                .extractor
                .extract(&frame)
                .map_err(|e| e.at_stage(i, "extract"))?;

            let left = self
                .normalizer
                .normalize(&left)
                .map_err(|e| e.at_stage(i, "normalize"))?;
            let right = self
                .normalizer
                .normalize(&right)
                .map_err(|e| e.at_stage(i, "normalize"))?;

            store
                .save_page(&left, left_number)
                .map_err(|e| e.at_stage(i, "persist"))?;
            store
                .save_page(&right, right_number)
                .map_err(|e| e.at_stage(i, "persist"))?;
            pages_written += 2;

            viewer.advance().map_err(|e| e.at_stage(i, "advance"))?;
        }

        Ok(pages_written)
    }
}
