//! UI Constants
//!
//! Centralized timing and layout constants shared by the components.

/// How long a click shake keeps the shaking flag set
pub const SHAKE_DURATION_MS: u64 = 600;

/// Length of one shake animation pass
pub const SHAKE_ANIMATION_MS: u64 = 500;

/// Shake easing control points, cubic-bezier(x1, y1, x2, y2)
pub const SHAKE_EASING: (f32, f32, f32, f32) = (0.36, 0.07, 0.19, 0.97);

/// Spinner rotation period
pub const SPINNER_PERIOD_MS: u64 = 1000;

/// Worker threads of the tokio runtime used by refetches
pub const REFETCH_WORKER_THREADS: usize = 2;

/// Module wrapper height while loading
pub const MODULE_LOADING_HEIGHT: f32 = 200.0;

/// Module wrapper height cap when not loading
pub const MODULE_MAX_HEIGHT: f32 = 999.0;

/// Error panel height inside a module
pub const MODULE_ERROR_HEIGHT: f32 = 300.0;

/// Loading indicator size inside a module
pub const MODULE_SPINNER_SIZE: f32 = 40.0;

/// Module outer margin
pub const MODULE_MARGIN: f32 = 10.0;

/// Default text area rows
pub const TEXT_AREA_ROWS: usize = 4;

/// Default text area minimum height
pub const TEXT_AREA_MIN_HEIGHT: f32 = 60.0;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "ah-kit.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "ah-kit.log";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 780.0;
