use super::{ManifestPatch, PatchError, PatchOutcome};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Deletes a stale resource if it exists. A missing file is not a failure.
pub struct RemoveFilePatch {
    label: &'static str,
    path: PathBuf,
}

impl RemoveFilePatch {
    pub fn new(label: &'static str, path: PathBuf) -> Self {
        Self { label, path }
    }
}

impl ManifestPatch for RemoveFilePatch {
    fn label(&self) -> &str {
        self.label
    }

    fn apply(&self) -> Result<PatchOutcome, PatchError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(PatchOutcome::Removed(self.path.clone())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(PatchOutcome::AlreadyAbsent(self.path.clone()))
            }
            Err(source) => Err(PatchError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
