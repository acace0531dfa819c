//! headless_chrome wrapper: Flipbook viewer -> frames + page turns.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::browser::tab::point::Point;
use headless_chrome::{Browser, LaunchOptions, Tab};
use image::RgbImage;
use tracing::debug;

use crate::capture::source::{FrameSource, PageAdvancer};
use crate::config::settings::BrowserSettings;
use crate::error::CaptureError;

/// Strips the viewer chrome that would otherwise bleed into the captured
/// page regions. Both mutations are guarded: a viewer without the element
/// is left alone.
const STRIP_VIEWER_CHROME_JS: &str = r#"
(function () {
    var container = document.getElementById('pagesContainer_documentViewer_parent');
    if (container) {
        var style = container.getAttribute('style');
        if (style) {
            var kept = style.split(';').filter(function (s) {
                return !s.trim().startsWith('padding-top:');
            }).join(';').trim();
            container.setAttribute('style', kept);
        }
    }
    var fisheye = document.getElementsByClassName('flowpaper_fisheye')[0];
    if (fisheye) {
        fisheye.parentNode.removeChild(fisheye);
    }
})();
"#;

/// A Flipbook open in a headless Chrome tab.
///
/// Construction launches the browser, navigates to the viewer, waits for the
/// initial load, and strips the viewer chrome; afterwards the tab supplies
/// raw frames and page turns to the capture loop.
pub struct ChromeFlipbook {
    // Kept alive for the job's duration; dropping it closes the tab too.
    _browser: Browser,
    tab: Arc<Tab>,
    advance_point: Point,
}

impl ChromeFlipbook {
    pub fn open(settings: &BrowserSettings, url: &str) -> crate::error::Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((settings.window_width, settings.window_height)))
            .path(settings.chrome_path.clone())
            .args(vec![OsStr::new("--disable-3d-apis")])
            .build()
            .map_err(|e| CaptureError::source_unavailable(e.to_string()))?;

        let browser =
            Browser::new(options).map_err(|e| CaptureError::source_unavailable(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| CaptureError::source_unavailable(e.to_string()))?;

        debug!(url, "navigating to flipbook");
        tab.navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .map_err(|e| CaptureError::source_unavailable(format!("navigation failed: {e}")))?;

        // The viewer keeps rendering after the navigation completes.
        std::thread::sleep(Duration::from_millis(settings.load_delay_ms));

        debug!("stripping viewer chrome (padding, fisheye)");
        tab.evaluate(STRIP_VIEWER_CHROME_JS, false)
            .map_err(|e| CaptureError::source_unavailable(format!("DOM cleanup failed: {e}")))?;

        Ok(ChromeFlipbook {
            _browser: browser,
            tab,
            advance_point: Point {
                x: settings.advance_click_x,
                y: settings.advance_click_y,
            },
        })
    }
}

impl FrameSource for ChromeFlipbook {
    fn frame(&mut self) -> crate::error::Result<RgbImage> {
        let png = self
            .tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| CaptureError::source_unavailable(format!("screenshot failed: {e}")))?;

        let frame = image::load_from_memory(&png)
            .map_err(|e| {
                CaptureError::source_unavailable(format!("cannot decode screenshot: {e}"))
            })?
            .to_rgb8();

        Ok(frame)
    }
}

impl PageAdvancer for ChromeFlipbook {
    fn advance(&mut self) -> crate::error::Result<()> {
        self.tab
            .click_point(self.advance_point)
            .map_err(|e| CaptureError::source_unavailable(format!("page-turn click failed: {e}")))?;
        Ok(())
    }
}
