//! Platform registry.
//!
//! A platform is one `platforms/<name>` build folder of the project. Each one
//! is described by a static [`PlatformDescriptor`]: where to probe, where its
//! images go, which images it needs, and which manifest patches accompany
//! them. [`build_registry`] turns the descriptor table into fresh
//! [`PlatformSpec`] values for one run; nothing is cached between runs.
//!
//! | Platform | Assets | Patches |
//! |---|---|---|
//! | [`ios`] | 3 universal squares | `Contents.json` |
//! | [`android`] | 6 density squares | stock splash removal, theme icon |
//! | [`windows`] | 10 landscape/portrait tiles | none |
//!
//! Registry order is the processing order.

pub mod android;
pub mod ios;
pub mod windows;

use crate::patch::ManifestPatch;
use crate::types::AssetSpec;
use std::path::{Path, PathBuf};

/// Static description of a supported platform.
pub struct PlatformDescriptor {
    pub name: &'static str,
    /// Directory (relative to the project root) whose presence marks the
    /// platform as added.
    pub probe_dir: &'static str,
    pub assets: &'static [AssetSpec],
    pub output_dir: fn(&Path, &str) -> PathBuf,
    pub patches: fn(&Path, &str) -> Vec<Box<dyn ManifestPatch>>,
}

impl PlatformDescriptor {
    pub fn is_added(&self, root: &Path) -> bool {
        root.join(self.probe_dir).exists()
    }
}

/// All supported platforms, in processing order.
pub const REGISTRY: &[PlatformDescriptor] = &[ios::PLATFORM, android::PLATFORM, windows::PLATFORM];

/// A platform instantiated for one project.
pub struct PlatformSpec {
    pub name: &'static str,
    pub is_added: bool,
    pub output_dir: PathBuf,
    pub assets: &'static [AssetSpec],
    pub patches: Vec<Box<dyn ManifestPatch>>,
}

impl PlatformSpec {
    /// Absolute path of one asset's output file.
    pub fn asset_path(&self, asset: &AssetSpec) -> PathBuf {
        self.output_dir.join(asset.filename)
    }

    /// Number of concurrent tasks this platform fans out into.
    pub fn task_count(&self) -> usize {
        self.assets.len() + self.patches.len()
    }
}

impl std::fmt::Debug for PlatformSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let patches: Vec<&str> = self.patches.iter().map(|p| p.label()).collect();
        f.debug_struct("PlatformSpec")
            .field("name", &self.name)
            .field("is_added", &self.is_added)
            .field("output_dir", &self.output_dir)
            .field("assets", &self.assets.len())
            .field("patches", &patches)
            .finish()
    }
}

/// Build the full platform list for `project_name`, probing `root` for each.
pub fn build_registry(root: &Path, project_name: &str) -> Vec<PlatformSpec> {
    REGISTRY
        .iter()
        .map(|d| PlatformSpec {
            name: d.name,
            is_added: d.is_added(root),
            output_dir: (d.output_dir)(root, project_name),
            assets: d.assets,
            patches: (d.patches)(root, project_name),
        })
        .collect()
}

/// Names of the platforms present under `root`, in registry order.
///
/// Needs no project name, so it can run before the manifest is read.
pub fn added_platforms(root: &Path) -> Vec<&'static str> {
    REGISTRY
        .iter()
        .filter(|d| d.is_added(root))
        .map(|d| d.name)
        .collect()
}
