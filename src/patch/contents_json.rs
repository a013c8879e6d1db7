//! Xcode asset catalog patch for the launch image set.

use super::{ManifestPatch, PatchError, PatchOutcome, read_document, write_document};
use serde::Serialize;
use std::path::PathBuf;

/// One entry of the `images` array Xcode reads.
#[derive(Debug, Serialize)]
struct ImageEntry {
    scale: String,
    idiom: &'static str,
    filename: String,
}

fn image_entries(scales: &[&str]) -> Vec<ImageEntry> {
    scales
        .iter()
        .map(|scale| ImageEntry {
            scale: scale.to_string(),
            idiom: "universal",
            filename: format!("Default@{scale}~universal.png"),
        })
        .collect()
}

/// Replace the `images` member of a `Contents.json` document.
///
/// Every other member keeps its value and position. Output is pretty-printed
/// with two-space indentation and ends with a newline, so the result depends
/// only on the input and the scale list.
pub fn rewrite_contents_json(raw: &str, scales: &[&str]) -> Result<String, ContentsError> {
    let mut doc: serde_json::Value = serde_json::from_str(raw)?;
    let object = doc.as_object_mut().ok_or(ContentsError::NotAnObject)?;
    object.insert(
        "images".to_string(),
        serde_json::to_value(image_entries(scales))?,
    );
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

#[derive(Debug, thiserror::Error)]
pub enum ContentsError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
}

/// Rewrites `Contents.json` so it lists exactly the generated universal scales.
pub struct ContentsJsonPatch {
    path: PathBuf,
    scales: &'static [&'static str],
}

impl ContentsJsonPatch {
    pub fn new(path: PathBuf, scales: &'static [&'static str]) -> Self {
        Self { path, scales }
    }
}

impl ManifestPatch for ContentsJsonPatch {
    fn label(&self) -> &str {
        "Contents.json"
    }

    fn apply(&self) -> Result<PatchOutcome, PatchError> {
        let raw = read_document(&self.path)?;
        let updated = rewrite_contents_json(&raw, self.scales).map_err(|e| match e {
            ContentsError::Json(source) => PatchError::Json {
                path: self.path.clone(),
                source,
            },
            ContentsError::NotAnObject => PatchError::Shape {
                path: self.path.clone(),
                message: ContentsError::NotAnObject.to_string(),
            },
        })?;
        write_document(&self.path, &updated)?;
        Ok(PatchOutcome::Updated(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    const SCALES: &[&str] = &["1x", "2x", "3x"];

    #[test]
    fn replaces_images_and_keeps_info() {
        let raw = r#"{
  "images": [{"idiom": "iphone", "filename": "old.png"}],
  "info": {"version": 1, "author": "xcode"}
}"#;
        let out = rewrite_contents_json(raw, SCALES).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

        let images = doc["images"].as_array().unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(images[1]["scale"], "2x");
        assert_eq!(images[1]["idiom"], "universal");
        assert_eq!(images[1]["filename"], "Default@2x~universal.png");
        assert_eq!(doc["info"]["author"], "xcode");
    }

    #[test]
    fn member_order_is_preserved() {
        let raw = r#"{"info": {"version": 1}, "images": []}"#;
        let out = rewrite_contents_json(raw, SCALES).unwrap();
        assert!(out.find("\"info\"").unwrap() < out.find("\"images\"").unwrap());
    }

    #[test]
    fn entry_fields_in_xcode_order() {
        let out = rewrite_contents_json("{}", &["1x"]).unwrap();
        assert_eq!(
            out,
            "{\n  \"images\": [\n    {\n      \"scale\": \"1x\",\n      \"idiom\": \"universal\",\n      \"filename\": \"Default@1x~universal.png\"\n    }\n  ]\n}\n"
        );
    }

    #[test]
    fn rewrite_is_idempotent() {
        let once = rewrite_contents_json(r#"{"images": [], "info": {}}"#, SCALES).unwrap();
        let twice = rewrite_contents_json(&once, SCALES).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_object_root_rejected() {
        assert!(matches!(
            rewrite_contents_json("[1, 2]", SCALES),
            Err(ContentsError::NotAnObject)
        ));
    }

    #[test]
    fn apply_missing_file_is_io_failure() {
        let tmp = tempfile::TempDir::new().unwrap();
        let patch = ContentsJsonPatch::new(tmp.path().join("Contents.json"), SCALES);
        let err = patch.apply().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn apply_malformed_file_is_parse_failure() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("Contents.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ContentsJsonPatch::new(path.clone(), SCALES)
            .apply()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn apply_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("Contents.json");
        std::fs::write(&path, r#"{"images": [], "info": {"version": 1}}"#).unwrap();

        let outcome = ContentsJsonPatch::new(path.clone(), SCALES).apply().unwrap();
        assert_eq!(outcome, PatchOutcome::Updated(path.clone()));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Default@3x~universal.png"));
    }
}
