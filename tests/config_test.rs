use std::io::Write;
use std::path::{Path, PathBuf};

use flipbook_capture::config::job::{Job, parse_batch_file, parse_batch_line};
use flipbook_capture::config::load_settings;
use flipbook_capture::config::settings::Settings;

// ============================================================
// 1. Settings deserialization
// ============================================================

#[test]
fn test_settings_full_yaml() {
    let yaml = r#"
browser:
  chrome_path: /usr/bin/chromium
  window_width: 1920
  window_height: 1080
  load_delay_ms: 1000
  advance_click_x: 1500.0
  advance_click_y: 500.0
capture:
  top: 10
  left: 20
  bottom: 900
  right: 1800
  settle_delay_ms: 2000
normalize:
  page_width: 1240
  page_height: 1754
  border_size: 25
  jpeg_quality: 70
"#;

    let settings = Settings::from_yaml(yaml).expect("should parse full settings");
    assert_eq!(
        settings.browser.chrome_path,
        Some(PathBuf::from("/usr/bin/chromium"))
    );
    assert_eq!(settings.browser.window_width, 1920);
    assert_eq!(settings.browser.advance_click_x, 1500.0);
    assert_eq!(settings.capture.left, 20);
    assert_eq!(settings.capture.settle_delay_ms, 2000);
    assert_eq!(settings.normalize.border_size, 25);
    assert_eq!(settings.normalize.jpeg_quality, 70);
}

#[test]
fn test_settings_partial_yaml_fills_defaults() {
    let yaml = r#"
capture:
  settle_delay_ms: 500
"#;

    let settings = Settings::from_yaml(yaml).expect("should parse partial settings");
    assert_eq!(settings.capture.settle_delay_ms, 500);
    // Untouched capture fields and sections keep their defaults.
    assert_eq!(settings.capture.top, 63);
    assert_eq!(settings.capture.right, 3136);
    assert_eq!(settings.browser.window_width, 3840);
    assert_eq!(settings.normalize.page_width, 2480);
}

#[test]
fn test_settings_defaults_match_reference_viewer() {
    let settings = Settings::default();
    assert_eq!(settings.browser.window_width, 3840);
    assert_eq!(settings.browser.window_height, 2160);
    assert_eq!(settings.browser.load_delay_ms, 3000);
    assert_eq!(settings.capture.top, 63);
    assert_eq!(settings.capture.left, 704);
    assert_eq!(settings.capture.bottom, 1781);
    assert_eq!(settings.capture.right, 3136);
    assert_eq!(settings.capture.settle_delay_ms, 3500);
    assert_eq!(settings.normalize.page_width, 2480);
    assert_eq!(settings.normalize.page_height, 3508);
    assert_eq!(settings.normalize.border_size, 50);
    assert_eq!(settings.normalize.jpeg_quality, 85);
}

#[test]
fn test_settings_invalid_yaml_fails() {
    let result = Settings::from_yaml("capture: [not, a, mapping]");
    assert!(result.is_err(), "should fail on mistyped section");
}

// ============================================================
// 2. Settings file resolution
// ============================================================

#[test]
fn test_load_settings_explicit_file() {
    let tmp_dir = tempfile::tempdir().expect("create temp dir");
    let path = tmp_dir.path().join("settings.yaml");
    let mut file = std::fs::File::create(&path).expect("create settings file");
    writeln!(file, "normalize:\n  jpeg_quality: 60").expect("write settings");

    let settings = load_settings(Some(&path)).expect("should load explicit file");
    assert_eq!(settings.normalize.jpeg_quality, 60);
}

#[test]
fn test_load_settings_explicit_missing_file_fails() {
    let result = load_settings(Some(Path::new("/nonexistent/config.yaml")));
    assert!(result.is_err(), "explicit config path must exist");
}

// ============================================================
// 3. Batch row parsing
// ============================================================

#[test]
fn test_parse_batch_line_well_formed() {
    let job = parse_batch_line("https://example.com/book;12;out/book").expect("should parse");
    assert_eq!(
        job,
        Job {
            source: "https://example.com/book".to_string(),
            iterations: 12,
            folder: PathBuf::from("out/book"),
        }
    );
}

#[test]
fn test_parse_batch_line_trims_fields() {
    let job = parse_batch_line(" https://example.com ; 3 ; out ").expect("should parse");
    assert_eq!(job.source, "https://example.com");
    assert_eq!(job.iterations, 3);
    assert_eq!(job.folder, PathBuf::from("out"));
}

#[test]
fn test_parse_batch_line_wrong_field_count() {
    assert!(parse_batch_line("https://example.com;3").is_err());
    assert!(parse_batch_line("https://example.com;3;out;extra").is_err());
}

#[test]
fn test_parse_batch_line_invalid_iterations() {
    assert!(parse_batch_line("https://example.com;abc;out").is_err());
    assert!(parse_batch_line("https://example.com;-1;out").is_err());
}

#[test]
fn test_parse_batch_line_zero_iterations() {
    assert!(parse_batch_line("https://example.com;0;out").is_err());
}

#[test]
fn test_parse_batch_line_empty_fields() {
    assert!(parse_batch_line(";3;out").is_err());
    assert!(parse_batch_line("https://example.com;3;").is_err());
}

// ============================================================
// 4. Batch file parsing
// ============================================================

#[test]
fn test_parse_batch_file_skips_blank_lines() {
    let tmp_dir = tempfile::tempdir().expect("create temp dir");
    let path = tmp_dir.path().join("jobs.csv");
    std::fs::write(
        &path,
        "https://example.com/a;2;out/a\n\nhttps://example.com/b;5;out/b\n",
    )
    .expect("write batch file");

    let jobs = parse_batch_file(&path).expect("should parse batch file");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].source, "https://example.com/a");
    assert_eq!(jobs[1].iterations, 5);
}

#[test]
fn test_parse_batch_file_malformed_row_fails_whole_batch() {
    let tmp_dir = tempfile::tempdir().expect("create temp dir");
    let path = tmp_dir.path().join("jobs.csv");
    std::fs::write(&path, "https://example.com/a;2;out/a\nbad row\n").expect("write batch file");

    assert!(parse_batch_file(&path).is_err());
}

#[test]
fn test_parse_batch_file_empty_fails() {
    let tmp_dir = tempfile::tempdir().expect("create temp dir");
    let path = tmp_dir.path().join("jobs.csv");
    std::fs::write(&path, "\n\n").expect("write batch file");

    assert!(parse_batch_file(&path).is_err());
}
