//! Output directory ownership and page persistence.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::CaptureError;
use crate::normalize::jpeg::encode_rgb_to_jpeg;

/// Owns a job's output directory and writes its page files.
///
/// The directory is cleared and recreated on construction, so a store holds
/// exclusive ownership of it for the job's duration.
#[derive(Debug)]
pub struct PageStore {
    dir: PathBuf,
    jpeg_quality: u8,
}

impl PageStore {
    /// Remove any existing directory tree at `dir` and recreate it empty.
    pub fn create(dir: &Path, jpeg_quality: u8) -> crate::error::Result<Self> {
        if dir.exists() {
            std::fs::remove_dir_all(dir)?;
        }
        std::fs::create_dir_all(dir)?;

        Ok(PageStore {
            dir: dir.to_path_buf(),
            jpeg_quality,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a given page number is persisted at.
    pub fn page_path(&self, page_number: u32) -> PathBuf {
        self.dir.join(format!("pag_{page_number}.jpg"))
    }

    /// Encode `page` as JPEG and write it as `pag_{page_number}.jpg`.
    pub fn save_page(&self, page: &RgbImage, page_number: u32) -> crate::error::Result<PathBuf> {
        let bytes = encode_rgb_to_jpeg(page, self.jpeg_quality)?;
        let path = self.page_path(page_number);

        std::fs::write(&path, bytes).map_err(|e| {
            CaptureError::persistence(format!("cannot write {}: {e}", path.display()))
        })?;

        Ok(path)
    }
}
