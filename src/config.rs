//! Run settings.
//!
//! Every knob the pipeline reads lives in one immutable [`Settings`] value,
//! built once from the command line and passed by reference from then on.
//!
//! ```text
//! my-app/                      ← root (--root, default ".")
//! ├── config.xml               ← project manifest (--config)
//! ├── splash.png               ← default source image (--splash)
//! ├── splash-android.png       ← optional per-platform override
//! └── platforms/
//!     ├── android/
//!     └── ios/
//! ```
//!
//! Relative manifest and splash paths resolve against the root; absolute ones
//! are used as given.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(String),
}

pub const DEFAULT_CONFIG: &str = "config.xml";
pub const DEFAULT_SPLASH: &str = "splash.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project root. Platform probes and every output path hang off it.
    pub root: PathBuf,
    /// Project manifest, as given on the command line.
    pub config_path: PathBuf,
    /// Default splash source, as given on the command line.
    pub splash_path: PathBuf,
    /// Stop scheduling platforms after the first one fails.
    pub fail_fast: bool,
    /// Max parallel workers (None = one per core).
    pub max_processes: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config_path: PathBuf::from(DEFAULT_CONFIG),
            splash_path: PathBuf::from(DEFAULT_SPLASH),
            fail_fast: false,
            max_processes: None,
        }
    }
}

impl Settings {
    /// Default settings for a project rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn config_file(&self) -> PathBuf {
        resolve(&self.root, &self.config_path)
    }

    pub fn splash_file(&self) -> PathBuf {
        resolve(&self.root, &self.splash_path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "jobs must be at least 1".to_string(),
            ));
        }
        if self.config_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "config path must not be empty".to_string(),
            ));
        }
        if self.splash_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "splash path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Resolve the effective thread count from settings.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(settings: &Settings) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    settings
        .max_processes
        .map(|n| n.min(cores))
        .unwrap_or(cores)
}
