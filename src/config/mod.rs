pub mod job;
pub mod settings;

use std::path::Path;

use settings::Settings;

const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Resolve and load the settings file.
///
/// An explicitly given path must exist and parse. With no explicit path,
/// `config.yaml` in the current directory is used if present, otherwise the
/// built-in defaults apply.
pub fn load_settings(explicit: Option<&Path>) -> crate::error::Result<Settings> {
    match explicit {
        Some(path) => Settings::from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                Settings::from_file(default_path)
            } else {
                Ok(Settings::default())
            }
        }
    }
}
