use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level settings, loaded from a YAML file.
///
/// Every section and field has a default matching the reference Flipbook
/// viewer at a 3840x2160 window, so an absent config file is fully usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub browser: BrowserSettings,
    pub capture: CaptureSettings,
    pub normalize: NormalizeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Path to the Chrome/Chromium executable. `None` lets the driver
    /// discover one on PATH.
    pub chrome_path: Option<PathBuf>,
    pub window_width: u32,
    pub window_height: u32,
    /// Wait after navigation before touching the viewer DOM.
    pub load_delay_ms: u64,
    /// Viewport coordinates of the viewer's "next page" hotspot.
    pub advance_click_x: f64,
    pub advance_click_y: f64,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        BrowserSettings {
            chrome_path: None,
            window_width: 3840,
            window_height: 2160,
            load_delay_ms: 3000,
            advance_click_x: 3150.0,
            advance_click_y: 930.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Viewport bounds of the two-page spread, in frame pixels.
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
    /// Wait before each capture so the viewer's page-turn animation and
    /// asynchronous rendering settle. The viewer exposes no render-complete
    /// signal, so a fixed delay stands in for one.
    pub settle_delay_ms: u64,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        CaptureSettings {
            top: 63,
            left: 704,
            bottom: 1781,
            right: 3136,
            settle_delay_ms: 3500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NormalizeSettings {
    /// Maximum output page dimensions (A4 at 300 DPI).
    pub page_width: u32,
    pub page_height: u32,
    /// Width of the left/right bands discarded from each page.
    pub border_size: u32,
    pub jpeg_quality: u8,
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        NormalizeSettings {
            page_width: 2480,
            page_height: 3508,
            border_size: 50,
            jpeg_quality: 85,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::CaptureError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
