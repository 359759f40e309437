// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Paper Diff";

/// Application name and metadata constants
pub const APP_NAME: &str = "Paper Diff";

/// Quiet period before a keystroke triggers a rediff
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Height of one rendered line, used to turn a line number into a scroll offset
pub const DEFAULT_LINE_HEIGHT: f32 = 18.0;
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Shown in the status bar when there is no position to report
pub const PLACEHOLDER: &str = "-";
