//! Out-of-band screenshot refresh: captures each deployed project's homepage
//! with a headless browser and records the image path back into the catalog.
//!
//! Runs sequentially, one browser invocation per project. A failed capture
//! records `null` for that project and the batch carries on.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use constants::screenshot::{
    DEFAULT_BROWSER, NAVIGATION_TIMEOUT_MS, SCREENSHOT_DIR, SETTLE_DELAY_MS, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH,
};
use portfolio_core::Catalog;
use thiserror::Error;

use crate::error::{Result, SiteError};
use crate::progress::progress_bar;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to launch {browser}: {source}")]
    Launch {
        browser: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{url} did not finish within {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("browser exited with {status} for {url}")]
    Exit { url: String, status: ExitStatus },

    #[error("could not load {url}: {source}")]
    Navigation {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not clear previous image at {path}: {source}")]
    StaleImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("browser reported success but wrote no image at {path}")]
    MissingImage { path: PathBuf },
}

/// Anything that can render a url to a PNG file.
pub trait ScreenshotCapture {
    fn capture(&mut self, url: &str, destination: &Path) -> std::result::Result<(), CaptureError>;
}

/// Removes an image left by an earlier run so only this run's output counts.
pub fn clear_image(path: &Path) -> std::result::Result<(), CaptureError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(CaptureError::StaleImage {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Headless Chromium driven through its command line. The command line
/// screenshots error pages as happily as real ones, so the url is loaded
/// over HTTP first and a failed load fails the capture.
#[derive(Debug, Clone)]
pub struct ChromiumCapture {
    pub browser: String,
    pub width: u32,
    pub height: u32,
    pub timeout: Duration,
    /// Virtual time granted after load so animations settle.
    pub settle: Duration,
}

impl Default for ChromiumCapture {
    fn default() -> Self {
        Self {
            browser: DEFAULT_BROWSER.to_string(),
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            timeout: Duration::from_millis(NAVIGATION_TIMEOUT_MS),
            settle: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }
}

impl ChromiumCapture {
    pub fn with_browser(browser: impl Into<String>) -> Self {
        Self {
            browser: browser.into(),
            ..Self::default()
        }
    }

    pub fn args(&self, url: &str, destination: &Path) -> Vec<String> {
        vec![
            "--headless=new".to_string(),
            "--no-sandbox".to_string(),
            "--disable-setuid-sandbox".to_string(),
            "--hide-scrollbars".to_string(),
            format!("--window-size={},{}", self.width, self.height),
            format!("--virtual-time-budget={}", self.settle.as_millis()),
            format!("--timeout={}", self.timeout.as_millis()),
            format!("--screenshot={}", destination.display()),
            url.to_string(),
        ]
    }

    /// Loads `url` within the navigation timeout. Any HTTP response counts
    /// as reachable; DNS, connection, TLS and timeout failures do not.
    pub fn check_reachable(&self, url: &str) -> std::result::Result<(), CaptureError> {
        let navigation = |source| CaptureError::Navigation {
            url: url.to_string(),
            source,
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(navigation)?;
        let response = client.get(url).send().map_err(navigation)?;
        tracing::debug!(url, status = %response.status(), "homepage reachable");
        Ok(())
    }
}

impl ScreenshotCapture for ChromiumCapture {
    fn capture(&mut self, url: &str, destination: &Path) -> std::result::Result<(), CaptureError> {
        clear_image(destination)?;
        self.check_reachable(url)?;

        let mut child = Command::new(&self.browser)
            .args(self.args(url, destination))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CaptureError::Launch {
                browser: self.browser.clone(),
                source,
            })?;

        // The browser's own --timeout covers navigation; this bounds the
        // whole process in case it hangs elsewhere.
        let deadline = Instant::now() + self.timeout + self.settle;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CaptureError::Timeout {
                        url: url.to_string(),
                        timeout: self.timeout,
                    });
                }
                Ok(None) => thread::sleep(Duration::from_millis(100)),
                Err(source) => {
                    return Err(CaptureError::Launch {
                        browser: self.browser.clone(),
                        source,
                    });
                }
            }
        };

        if !status.success() {
            return Err(CaptureError::Exit {
                url: url.to_string(),
                status,
            });
        }
        if !destination.is_file() {
            return Err(CaptureError::MissingImage {
                path: destination.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// File stem for a project's screenshot: ASCII alphanumerics kept, anything
/// else replaced by `_`, then lowercased.
pub fn safe_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Site-relative url the page uses for a captured screenshot.
pub fn public_path(name: &str) -> String {
    format!("/{}/{}.png", SCREENSHOT_DIR, safe_file_stem(name))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenshotReport {
    pub captured: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Captures every deployed project into `public_dir/screenshots` and returns
/// the catalog with `screenshotPath` rewritten for every record.
pub fn update_screenshots(
    catalog: Catalog,
    public_dir: &Path,
    capturer: &mut impl ScreenshotCapture,
) -> Result<(Catalog, ScreenshotReport)> {
    let screenshot_dir = public_dir.join(SCREENSHOT_DIR);
    fs::create_dir_all(&screenshot_dir).map_err(|source| SiteError::Write {
        path: screenshot_dir.clone(),
        source,
    })?;

    tracing::info!(projects = catalog.len(), "updating screenshots");
    let pb = progress_bar(catalog.len(), "projects", "Capturing screenshots");
    let mut report = ScreenshotReport::default();
    let mut records = catalog.into_records();

    for record in &mut records {
        pb.set_message(record.name.clone());
        let Some(homepage) = record.homepage().map(str::to_string) else {
            tracing::info!(project = %record.name, "skipping, no homepage");
            record.screenshot_path = None;
            report.skipped += 1;
            pb.inc(1);
            continue;
        };

        let destination = screenshot_dir.join(format!("{}.png", safe_file_stem(&record.name)));
        tracing::info!(project = %record.name, url = %homepage, "capturing");
        let captured =
            clear_image(&destination).and_then(|()| capturer.capture(&homepage, &destination));
        match captured {
            Ok(()) => {
                tracing::debug!(path = %destination.display(), "screenshot saved");
                record.screenshot_path = Some(public_path(&record.name));
                report.captured += 1;
            }
            Err(err) => {
                tracing::warn!(project = %record.name, error = %err, "screenshot failed");
                if let Err(leftover) = clear_image(&destination) {
                    tracing::warn!(error = %leftover, "partial screenshot left behind");
                }
                record.screenshot_path = None;
                report.failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Screenshots updated");
    tracing::info!(
        captured = report.captured,
        skipped = report.skipped,
        failed = report.failed,
        "screenshot run complete"
    );
    Ok((Catalog::new(records)?, report))
}

/// Rewrites the catalog asset in place.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let json = catalog.to_json_pretty()?;
    fs::write(path, json).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "catalog updated with screenshot paths");
    Ok(())
}
