//! iOS: universal launch images in the Xcode asset catalog.

use super::PlatformDescriptor;
use crate::patch::{ContentsJsonPatch, ManifestPatch};
use crate::types::AssetSpec;
use std::path::{Path, PathBuf};

const ASSETS: &[AssetSpec] = &[
    AssetSpec::new("Default@1x~universal.png", 1366, 1366),
    AssetSpec::new("Default@2x~universal.png", 2732, 2732),
    AssetSpec::new("Default@3x~universal.png", 4098, 4098),
];

/// Scales listed in `Contents.json`; one per asset above.
pub const SCALES: &[&str] = &["1x", "2x", "3x"];

pub const PLATFORM: PlatformDescriptor = PlatformDescriptor {
    name: "ios",
    probe_dir: "platforms/ios",
    assets: ASSETS,
    output_dir,
    patches,
};

fn output_dir(root: &Path, project_name: &str) -> PathBuf {
    root.join("platforms/ios")
        .join(project_name)
        .join("Images.xcassets/LaunchStoryboard.imageset")
}

fn patches(root: &Path, project_name: &str) -> Vec<Box<dyn ManifestPatch>> {
    vec![Box::new(ContentsJsonPatch::new(
        output_dir(root, project_name).join("Contents.json"),
        SCALES,
    ))]
}
