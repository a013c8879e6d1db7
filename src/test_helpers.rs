//! Shared test utilities.
//!
//! Builds throwaway Cordova-style projects in a temp directory so pipeline
//! tests can run end to end without touching a real project.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fixture = ProjectFixture::new("MyApp")
//!     .with_platform("ios")
//!     .with_platform("android")
//!     .with_splash_override("android");
//!
//! let outcome = pipeline::run_with_backend(&backend, &fixture.settings(), &reporter);
//! assert_png_size(&fixture.root().join("..."), 180, 180);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::Settings;

// =========================================================================
// Fixture documents
// =========================================================================

/// Stock `Contents.json` of a fresh Cordova iOS platform.
pub const STOCK_CONTENTS_JSON: &str = r#"{
  "images": [
    {
      "idiom": "universal",
      "filename": "Default@2x~universal~anyany.png",
      "scale": "2x"
    }
  ],
  "info": {
    "author": "Xcode",
    "version": 1
  }
}
"#;

/// Stock `themes.xml` of a fresh Cordova Android platform.
pub const STOCK_THEMES_XML: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<resources xmlns:tools="http://schemas.android.com/tools">
    <style name="Theme.App.SplashScreen" parent="Theme.SplashScreen.IconBackground">
        <item name="windowSplashScreenBackground">@color/cdv_splashscreen_background</item>
        <item name="windowSplashScreenAnimatedIcon">@drawable/ic_cdv_splashscreen</item>
        <item name="windowSplashScreenAnimationDuration">200</item>
        <item name="postSplashScreenTheme">@style/Theme.AppCompat.NoActionBar</item>
    </style>
</resources>
"#;

pub fn config_xml(name: &str) -> String {
    format!(
        r#"<?xml version='1.0' encoding='utf-8'?>
<widget id="io.cordova.hellocordova" version="1.0.0" xmlns="http://www.w3.org/ns/widgets">
    <name>{name}</name>
    <description>Sample Apache Cordova App</description>
</widget>
"#
    )
}

// =========================================================================
// Images
// =========================================================================

/// Write a gradient PNG of the given size, creating parent directories.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Assert a PNG on disk has exactly the given size.
pub fn assert_png_size(path: &Path, width: u32, height: u32) {
    let (w, h) = image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("{} is not a readable image: {e}", path.display()));
    assert_eq!((w, h), (width, height), "{}", path.display());
}

// =========================================================================
// Project fixture
// =========================================================================

/// A temp-dir Cordova project with a manifest and a default splash.
pub struct ProjectFixture {
    tmp: TempDir,
    name: String,
}

impl ProjectFixture {
    /// Project with `config.xml` naming `name` and a 64×48 `splash.png`,
    /// but no platforms yet.
    pub fn new(name: &str) -> Self {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.xml"), config_xml(name)).unwrap();
        write_test_png(&tmp.path().join("splash.png"), 64, 48);
        Self {
            tmp,
            name: name.to_string(),
        }
    }

    /// Add a platform folder with the stock files its patches expect.
    pub fn with_platform(self, platform: &str) -> Self {
        let dir = self.root().join("platforms").join(platform);
        std::fs::create_dir_all(&dir).unwrap();
        match platform {
            "ios" => {
                let path = self.contents_json_path();
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(path, STOCK_CONTENTS_JSON).unwrap();
            }
            "android" => {
                let themes = self.themes_path();
                std::fs::create_dir_all(themes.parent().unwrap()).unwrap();
                std::fs::write(themes, STOCK_THEMES_XML).unwrap();

                let stock = self.stock_splash_path();
                std::fs::create_dir_all(stock.parent().unwrap()).unwrap();
                std::fs::write(stock, "<vector/>").unwrap();
            }
            _ => {}
        }
        self
    }

    /// Add `splash-<platform>.png` next to the default splash.
    pub fn with_splash_override(self, platform: &str) -> Self {
        write_test_png(&self.override_path(platform), 48, 64);
        self
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn settings(&self) -> Settings {
        Settings::for_root(self.root())
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.xml")
    }

    pub fn splash_path(&self) -> PathBuf {
        self.root().join("splash.png")
    }

    pub fn override_path(&self, platform: &str) -> PathBuf {
        self.root().join(format!("splash-{platform}.png"))
    }

    pub fn ios_imageset(&self) -> PathBuf {
        self.root()
            .join("platforms/ios")
            .join(&self.name)
            .join("Images.xcassets/LaunchStoryboard.imageset")
    }

    pub fn contents_json_path(&self) -> PathBuf {
        self.ios_imageset().join("Contents.json")
    }

    pub fn android_res(&self) -> PathBuf {
        self.root().join("platforms/android/app/src/main/res")
    }

    pub fn themes_path(&self) -> PathBuf {
        self.android_res().join("values/themes.xml")
    }

    pub fn stock_splash_path(&self) -> PathBuf {
        self.android_res().join("drawable/ic_cdv_splashscreen.xml")
    }
}
