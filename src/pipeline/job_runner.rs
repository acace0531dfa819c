//! Job unit: output directory setup -> browser open -> capture loop.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::browser::chrome::ChromeFlipbook;
use crate::capture::extractor::PageExtractor;
use crate::capture::geometry::CaptureGeometry;
use crate::config::settings::Settings;
use crate::normalize::{ImageNormalizer, NormalizeConfig};
use crate::pipeline::capture_loop::CaptureLoop;
use crate::storage::PageStore;

/// Configuration for a single job.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Flipbook URL.
    pub source: String,
    /// Number of page-turn iterations; each yields two pages.
    pub iterations: u32,
    pub output_dir: PathBuf,
}

/// Result of a completed job.
#[derive(Debug)]
pub struct JobResult {
    pub source: String,
    pub output_dir: PathBuf,
    pub pages_written: u32,
}

/// Run one capture job to completion.
///
/// The output directory is cleared and recreated first, so a failed job
/// never leaves a mix of old and new pages behind. The browser lives
/// exactly as long as the job.
pub fn run_job(config: &JobConfig, settings: &Settings) -> crate::error::Result<JobResult> {
    info!(
        source = %config.source,
        iterations = config.iterations,
        output_dir = %config.output_dir.display(),
        "starting capture job"
    );

    let store = PageStore::create(&config.output_dir, settings.normalize.jpeg_quality)?;
    let mut viewer = ChromeFlipbook::open(&settings.browser, &config.source)?;

    let capture_loop = CaptureLoop::new(
        PageExtractor::new(CaptureGeometry::from(&settings.capture)),
        ImageNormalizer::new(NormalizeConfig::from(&settings.normalize)),
        Duration::from_millis(settings.capture.settle_delay_ms),
    );

    let pages_written = capture_loop.run(&mut viewer, &store, config.iterations)?;

    info!(pages_written, "capture job finished");

    Ok(JobResult {
        source: config.source.clone(),
        output_dir: config.output_dir.clone(),
        pages_written,
    })
}
