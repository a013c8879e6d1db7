//! Shared types used across the pipeline stages.

use std::fmt;

/// One required output image of a platform.
///
/// `filename` is relative to the platform's output directory and may contain
/// subdirectories (`drawable-hdpi/screen.png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub filename: &'static str,
    pub width: u32,
    pub height: u32,
}

impl AssetSpec {
    pub const fn new(filename: &'static str, width: u32, height: u32) -> Self {
        Self {
            filename,
            width,
            height,
        }
    }
}

/// Coarse classification of every failure the pipeline can report.
///
/// - `Environment`: the project is not in a state generation can start from
///   (no platforms, source image or manifest missing). Nothing is written.
/// - `Parse`: a structured document (project manifest, patched manifest) is
///   unreadable or malformed.
/// - `Io`: a read, write or crop failed for one asset or patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Environment,
    Parse,
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Environment => "environment error",
            ErrorKind::Parse => "parse error",
            ErrorKind::Io => "I/O error",
        })
    }
}

/// Pipeline state, emitted on every transition.
///
/// ```text
/// Validating → ReadingMetadata → BuildingRegistry → Generating[0..n] → Done
///     └──────────────┴──────────────────┴──────────────────┴──────→ Failed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Validating,
    ReadingMetadata,
    BuildingRegistry,
    Generating { index: usize, platform: String },
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validating => f.write_str("Checking Project & Splash"),
            Stage::ReadingMetadata => f.write_str("Reading project metadata"),
            Stage::BuildingRegistry => f.write_str("Resolving platforms"),
            Stage::Generating { platform, .. } => {
                write!(f, "Generating splash screen for {platform}")
            }
            Stage::Done => f.write_str("Done"),
            Stage::Failed => f.write_str("Failed"),
        }
    }
}
