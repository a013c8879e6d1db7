//! Project metadata: the project name and per-platform source resolution.
//!
//! ## Project name
//!
//! The project manifest is a Cordova-style `config.xml`:
//!
//! ```xml
//! <widget id="com.example.app" version="1.0.0" xmlns="http://www.w3.org/ns/widgets">
//!     <name>MyApp</name>
//!     ...
//! </widget>
//! ```
//!
//! The name is the trimmed text of the first `<name>` directly under the root
//! `<widget>`. It shapes the iOS output path, so there is no fallback: an
//! unreadable manifest or a missing or empty name stops the run.
//!
//! ## Source resolution
//!
//! Every platform crops from the default splash unless a sibling file named
//! `<splash-stem>-<platform>.png` exists:
//!
//! ```text
//! splash.png            ← default source
//! splash-android.png    ← used for every android asset instead
//! ```

use crate::types::ErrorKind;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed XML in {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },
    #[error("{} has root <{root}>, expected <widget>", path.display())]
    NotAWidget { path: PathBuf, root: String },
    #[error("{} declares no project <name>", path.display())]
    MissingName { path: PathBuf },
}

impl MetadataError {
    /// Every metadata failure is fatal and reported as a parse error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

/// Read the project name from the manifest at `path`.
pub fn read_project_name(path: &Path) -> Result<String, MetadataError> {
    let xml = std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_project_name(&xml, path)
}

/// Extract the project name from manifest text. `path` is only used in errors.
pub fn parse_project_name(xml: &str, path: &Path) -> Result<String, MetadataError> {
    let xml_err = |message: String| MetadataError::Xml {
        path: path.to_path_buf(),
        message,
    };
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut in_name = false;
    let mut name = String::new();

    loop {
        match reader.read_event().map_err(|e| xml_err(e.to_string()))? {
            Event::Start(e) => {
                depth += 1;
                if depth == 1 {
                    check_root(e.local_name().as_ref(), path)?;
                } else if depth == 2 && e.local_name().as_ref() == b"name" {
                    in_name = true;
                    name.clear();
                }
            }
            Event::Empty(e) if depth == 0 => {
                check_root(e.local_name().as_ref(), path)?;
                break;
            }
            Event::Text(t) if in_name => {
                let text = t.unescape().map_err(|e| xml_err(e.to_string()))?;
                name.push_str(&text);
            }
            Event::CData(c) if in_name => name.push_str(&String::from_utf8_lossy(&c)),
            Event::End(_) => {
                if in_name && depth == 2 {
                    in_name = false;
                    let trimmed = name.trim();
                    if !trimmed.is_empty() {
                        return Ok(trimmed.to_string());
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Err(MetadataError::MissingName {
        path: path.to_path_buf(),
    })
}

fn check_root(local_name: &[u8], path: &Path) -> Result<(), MetadataError> {
    if local_name == b"widget" {
        Ok(())
    } else {
        Err(MetadataError::NotAWidget {
            path: path.to_path_buf(),
            root: String::from_utf8_lossy(local_name).into_owned(),
        })
    }
}

/// Everything the asset engine needs to know about the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    /// Default source image.
    pub splash: PathBuf,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>, splash: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            splash: splash.into(),
        }
    }

    /// Path of the per-platform override for `platform`, whether or not it exists.
    ///
    /// Only `.png` splash paths have an override.
    pub fn override_path(&self, platform: &str) -> Option<PathBuf> {
        let file_name = self.splash.file_name()?.to_str()?;
        let stem = file_name.strip_suffix(".png")?;
        Some(self.splash.with_file_name(format!("{stem}-{platform}.png")))
    }

    /// Source image for every asset of `platform`.
    pub fn source_for(&self, platform: &str) -> PathBuf {
        self.override_path(platform)
            .filter(|p| p.is_file())
            .unwrap_or_else(|| self.splash.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<String, MetadataError> {
        parse_project_name(xml, Path::new("config.xml"))
    }

    #[test]
    fn reads_name_from_cordova_config() {
        let xml = r#"<?xml version='1.0' encoding='utf-8'?>
<widget id="io.cordova.hellocordova" version="1.0.0" xmlns="http://www.w3.org/ns/widgets">
    <name>MyApp</name>
    <description>Sample Apache Cordova App</description>
</widget>"#;
        assert_eq!(parse(xml).unwrap(), "MyApp");
    }

    #[test]
    fn name_is_trimmed_and_unescaped() {
        let xml = "<widget><name>\n   Tom &amp; Jerry  \n</name></widget>";
        assert_eq!(parse(xml).unwrap(), "Tom & Jerry");
    }

    #[test]
    fn nested_name_elements_are_ignored() {
        let xml = "<widget><author><name>Jane</name></author><name>Real</name></widget>";
        assert_eq!(parse(xml).unwrap(), "Real");
    }

    #[test]
    fn prefixed_root_is_accepted() {
        let xml = r#"<w:widget xmlns:w="http://www.w3.org/ns/widgets"><w:name>Pref</w:name></w:widget>"#;
        assert_eq!(parse(xml).unwrap(), "Pref");
    }

    #[test]
    fn missing_name_is_error() {
        let xml = "<widget><description>x</description></widget>";
        assert!(matches!(parse(xml), Err(MetadataError::MissingName { .. })));
    }

    #[test]
    fn empty_name_is_error() {
        let xml = "<widget><name>   </name></widget>";
        assert!(matches!(parse(xml), Err(MetadataError::MissingName { .. })));
    }

    #[test]
    fn wrong_root_is_error() {
        let xml = "<manifest><name>X</name></manifest>";
        assert!(matches!(parse(xml), Err(MetadataError::NotAWidget { .. })));
    }

    #[test]
    fn malformed_xml_is_error() {
        let xml = "<widget><name>X</description></widget>";
        let err = parse(xml).unwrap_err();
        assert!(matches!(err, MetadataError::Xml { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn unreadable_manifest_is_parse_error() {
        let err = read_project_name(Path::new("/nonexistent/config.xml")).unwrap_err();
        assert!(matches!(err, MetadataError::Read { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn override_path_for_png_splash() {
        let ctx = ProjectContext::new("MyApp", "/proj/res/splash.png");
        assert_eq!(
            ctx.override_path("android"),
            Some(PathBuf::from("/proj/res/splash-android.png"))
        );
    }

    #[test]
    fn no_override_for_other_extensions() {
        let ctx = ProjectContext::new("MyApp", "/proj/splash.jpg");
        assert_eq!(ctx.override_path("ios"), None);
    }

    #[test]
    fn source_for_prefers_existing_override() {
        let tmp = tempfile::TempDir::new().unwrap();
        let splash = tmp.path().join("splash.png");
        std::fs::write(&splash, b"").unwrap();
        std::fs::write(tmp.path().join("splash-ios.png"), b"").unwrap();

        let ctx = ProjectContext::new("MyApp", &splash);
        assert_eq!(ctx.source_for("ios"), tmp.path().join("splash-ios.png"));
        assert_eq!(ctx.source_for("android"), splash);
    }
}
