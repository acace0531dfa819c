pub mod jpeg;
pub mod normalizer;

pub use normalizer::{ImageNormalizer, NormalizeConfig};

use crate::config::settings::NormalizeSettings;

impl From<&NormalizeSettings> for NormalizeConfig {
    fn from(s: &NormalizeSettings) -> Self {
        NormalizeConfig {
            envelope_width: s.page_width,
            envelope_height: s.page_height,
            border_size: s.border_size,
        }
    }
}
