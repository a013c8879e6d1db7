//! Android: one square `screen.png` per density bucket.

use super::PlatformDescriptor;
use crate::patch::{ManifestPatch, RemoveFilePatch, ThemeIconPatch};
use crate::types::AssetSpec;
use std::path::{Path, PathBuf};

const ASSETS: &[AssetSpec] = &[
    AssetSpec::new("drawable-ldpi/screen.png", 180, 180),
    AssetSpec::new("drawable-mdpi/screen.png", 240, 240),
    AssetSpec::new("drawable-hdpi/screen.png", 360, 360),
    AssetSpec::new("drawable-xhdpi/screen.png", 480, 480),
    AssetSpec::new("drawable-xxhdpi/screen.png", 720, 720),
    AssetSpec::new("drawable-xxxhdpi/screen.png", 960, 960),
];

/// Vector splash that cordova-android installs by default.
pub const STOCK_SPLASH: &str = "drawable/ic_cdv_splashscreen.xml";
pub const THEME: &str = "values/themes.xml";
pub const THEME_ICON_ITEM: &str = "windowSplashScreenAnimatedIcon";
pub const THEME_ICON_VALUE: &str = "@drawable/screen";

pub const PLATFORM: PlatformDescriptor = PlatformDescriptor {
    name: "android",
    probe_dir: "platforms/android",
    assets: ASSETS,
    output_dir,
    patches,
};

fn output_dir(root: &Path, _project_name: &str) -> PathBuf {
    root.join("platforms/android/app/src/main/res")
}

fn patches(root: &Path, project_name: &str) -> Vec<Box<dyn ManifestPatch>> {
    let res = output_dir(root, project_name);
    vec![
        Box::new(RemoveFilePatch::new("default splash", res.join(STOCK_SPLASH))),
        Box::new(ThemeIconPatch::new(
            res.join(THEME),
            THEME_ICON_ITEM,
            THEME_ICON_VALUE,
        )),
    ]
}
