//! Platform manifest patches.
//!
//! Some platforms need more than image files: Xcode reads the launch image set
//! from `Contents.json`, and Android's theme must point its splash icon at the
//! generated drawable. Each such edit is a [`ManifestPatch`]: a self-contained
//! task that knows its file and how to rewrite it. Platforms list their patches
//! and the orchestrator runs them next to the asset crops without knowing
//! which platform they belong to.
//!
//! | Patch | File | Effect |
//! |---|---|---|
//! | [`ContentsJsonPatch`] | `LaunchStoryboard.imageset/Contents.json` | rebuilds `images` from the scale table |
//! | [`RemoveFilePatch`] | `drawable/ic_cdv_splashscreen.xml` | deletes the stock splash if present |
//! | [`ThemeIconPatch`] | `values/themes.xml` | points `windowSplashScreenAnimatedIcon` at the new drawable |

mod contents_json;
mod remove_file;
mod theme_xml;

pub use contents_json::{ContentsError, ContentsJsonPatch, rewrite_contents_json};
pub use remove_file::RemoveFilePatch;
pub use theme_xml::{ThemeIconPatch, rewrite_theme_item};

use crate::types::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("malformed XML in {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },
    #[error("unexpected document shape in {}: {message}", path.display())]
    Shape { path: PathBuf, message: String },
}

impl PatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PatchError::Read { .. } | PatchError::Write { .. } | PatchError::Remove { .. } => {
                ErrorKind::Io
            }
            PatchError::Json { .. } | PatchError::Xml { .. } | PatchError::Shape { .. } => {
                ErrorKind::Parse
            }
        }
    }
}

/// What a successful patch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File rewritten in place.
    Updated(PathBuf),
    /// File deleted.
    Removed(PathBuf),
    /// Nothing to delete.
    AlreadyAbsent(PathBuf),
}

impl PatchOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PatchOutcome::Updated(p) | PatchOutcome::Removed(p) | PatchOutcome::AlreadyAbsent(p) => {
                p
            }
        }
    }
}

/// A platform-specific edit that runs alongside asset generation.
///
/// Patches of one platform run concurrently with each other and with that
/// platform's crops, so an implementation must only touch its own file.
pub trait ManifestPatch: Send + Sync {
    /// Short human-readable name, e.g. `Contents.json`.
    fn label(&self) -> &str;

    fn apply(&self) -> Result<PatchOutcome, PatchError>;
}

fn read_document(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(path: &Path, contents: &str) -> Result<(), PatchError> {
    std::fs::write(path, contents).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
