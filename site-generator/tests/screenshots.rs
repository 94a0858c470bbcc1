use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use portfolio_core::Catalog;
use pretty_assertions::assert_eq;
use site_generator::screenshots::{
    CaptureError, ScreenshotCapture, ScreenshotReport, update_screenshots, write_catalog,
};

/// Writes a stub image for every url except the ones told to fail. Urls in
/// `error_pages` get an image written and still fail, the way a browser
/// screenshots its own error page.
#[derive(Default)]
struct FakeCapture {
    failing: HashSet<String>,
    error_pages: HashSet<String>,
    visited: Vec<String>,
}

impl ScreenshotCapture for FakeCapture {
    fn capture(&mut self, url: &str, destination: &Path) -> Result<(), CaptureError> {
        self.visited.push(url.to_string());
        if self.error_pages.contains(url) {
            fs::write(destination, b"error page").unwrap();
            return Err(CaptureError::Timeout {
                url: url.to_string(),
                timeout: Duration::from_secs(90),
            });
        }
        if self.failing.contains(url) {
            return Err(CaptureError::MissingImage {
                path: destination.to_path_buf(),
            });
        }
        fs::write(destination, b"png").unwrap();
        Ok(())
    }
}

const CATALOG: &str = r#"[
  {"name": "Video-Clipper", "url": "https://github.com/h/video-clipper", "homepageUrl": "https://clip.example", "languages": [], "openGraphImageUrl": "", "screenshotPath": "/screenshots/old.png"},
  {"name": "broken", "url": "https://github.com/h/broken", "homepageUrl": "https://down.example", "languages": [], "openGraphImageUrl": ""},
  {"name": "some-lib", "url": "https://github.com/h/some-lib", "homepageUrl": "", "languages": [], "openGraphImageUrl": "", "screenshotPath": "/screenshots/stale.png"},
  {"name": "aibou", "url": "https://github.com/h/aibou", "homepageUrl": "https://aibou.example", "languages": [], "openGraphImageUrl": ""}
]"#;

fn screenshot_paths(catalog: &Catalog) -> Vec<Option<String>> {
    catalog.iter().map(|r| r.screenshot_path.clone()).collect()
}

#[test]
fn failures_and_skips_record_null_and_the_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let mut capture = FakeCapture {
        failing: HashSet::from(["https://down.example".to_string()]),
        ..FakeCapture::default()
    };

    let (updated, report) = update_screenshots(catalog, dir.path(), &mut capture).unwrap();

    assert_eq!(
        report,
        ScreenshotReport {
            captured: 2,
            skipped: 1,
            failed: 1,
        }
    );
    assert_eq!(
        screenshot_paths(&updated),
        vec![
            Some("/screenshots/video_clipper.png".to_string()),
            None,
            None,
            Some("/screenshots/aibou.png".to_string()),
        ]
    );
    assert_eq!(
        capture.visited,
        vec!["https://clip.example", "https://down.example", "https://aibou.example"]
    );
    assert!(dir.path().join("screenshots/video_clipper.png").is_file());
    assert!(!dir.path().join("screenshots/broken.png").exists());
}

#[test]
fn rewritten_catalog_keeps_order_and_nulls() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path: PathBuf = dir.path().join("repos.json");
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let names: Vec<String> = catalog.names().map(String::from).collect();

    let (updated, _) =
        update_screenshots(catalog, &dir.path().join("public"), &mut FakeCapture::default())
            .unwrap();
    write_catalog(&catalog_path, &updated).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&catalog_path).unwrap()).unwrap();
    assert_eq!(raw[2]["screenshotPath"], serde_json::Value::Null);
    assert_eq!(raw[3]["screenshotPath"], "/screenshots/aibou.png");

    let reloaded = Catalog::load(&catalog_path).unwrap();
    assert_eq!(reloaded.names().map(String::from).collect::<Vec<_>>(), names);
}

#[test]
fn failed_navigation_leaves_no_image_and_records_null() {
    let dir = tempfile::tempdir().unwrap();
    let screenshots = dir.path().join("screenshots");
    fs::create_dir_all(&screenshots).unwrap();
    fs::write(screenshots.join("broken.png"), b"from last week").unwrap();

    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let mut capture = FakeCapture {
        failing: HashSet::from(["https://down.example".to_string()]),
        error_pages: HashSet::from(["https://aibou.example".to_string()]),
        ..FakeCapture::default()
    };

    let (updated, report) = update_screenshots(catalog, dir.path(), &mut capture).unwrap();

    assert_eq!(report.failed, 2);
    assert_eq!(
        screenshot_paths(&updated),
        vec![Some("/screenshots/video_clipper.png".to_string()), None, None, None]
    );
    assert!(!screenshots.join("broken.png").exists());
    assert!(!screenshots.join("aibou.png").exists());
}
