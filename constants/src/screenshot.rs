/// Viewport used for every capture.
pub const VIEWPORT_WIDTH: u32 = 1440;
pub const VIEWPORT_HEIGHT: u32 = 1080;

/// Upper bound for page navigation before the capture is abandoned.
pub const NAVIGATION_TIMEOUT_MS: u64 = 90_000;

/// Delay after load so entry animations settle before capturing.
pub const SETTLE_DELAY_MS: u64 = 2_000;

/// Sub-directory of the public dir that receives captured images.
pub const SCREENSHOT_DIR: &str = "screenshots";

/// Default browser binary; overridable from the command line.
pub const DEFAULT_BROWSER: &str = "chromium";
