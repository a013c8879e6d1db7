//! Windows: landscape splash tiles plus phone portrait variants.

use super::PlatformDescriptor;
use crate::patch::ManifestPatch;
use crate::types::AssetSpec;
use std::path::{Path, PathBuf};

const ASSETS: &[AssetSpec] = &[
    // Landscape
    AssetSpec::new("SplashScreen.scale-100.png", 620, 300),
    AssetSpec::new("SplashScreen.scale-125.png", 775, 375),
    AssetSpec::new("SplashScreen.scale-140.png", 868, 420),
    AssetSpec::new("SplashScreen.scale-150.png", 930, 450),
    AssetSpec::new("SplashScreen.scale-180.png", 1116, 540),
    AssetSpec::new("SplashScreen.scale-200.png", 1240, 600),
    AssetSpec::new("SplashScreen.scale-400.png", 2480, 1200),
    // Portrait
    AssetSpec::new("SplashScreenPhone.scale-240.png", 1152, 1920),
    AssetSpec::new("SplashScreenPhone.scale-140.png", 672, 1120),
    AssetSpec::new("SplashScreenPhone.scale-100.png", 480, 800),
];

pub const PLATFORM: PlatformDescriptor = PlatformDescriptor {
    name: "windows",
    probe_dir: "platforms/windows",
    assets: ASSETS,
    output_dir,
    patches,
};

fn output_dir(root: &Path, _project_name: &str) -> PathBuf {
    root.join("platforms/windows/images")
}

fn patches(_root: &Path, _project_name: &str) -> Vec<Box<dyn ManifestPatch>> {
    Vec::new()
}
