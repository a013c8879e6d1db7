//! Preflight gate.
//!
//! Three checks run in a fixed order, each only after the previous one passed:
//!
//! 1. at least one platform folder exists under the root
//! 2. the default splash source is a file
//! 3. the project manifest is a file
//!
//! The first failure aborts the run before anything is read or written.

use crate::config::Settings;
use crate::events::{PipelineEvent, Reporter};
use crate::platforms::added_platforms;
use crate::types::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreflightError {
    #[error(
        "No cordova platforms found under {}. Make sure you are in the root folder of your \
         Cordova project and add platforms with 'cordova platform add'",
        root.display()
    )]
    NoPlatforms { root: PathBuf },
    #[error("{} does not exist", .0.display())]
    SplashMissing(PathBuf),
    #[error("cordova's {} does not exist", .0.display())]
    ConfigMissing(PathBuf),
}

impl PreflightError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Environment
    }
}

/// Run every check in order, reporting each result.
///
/// Returns the names of the added platforms.
pub fn check(settings: &Settings, reporter: &Reporter) -> Result<Vec<&'static str>, PreflightError> {
    let result = run_checks(settings, reporter);
    if let Err(e) = &result {
        reporter.emit(PipelineEvent::CheckFailed(e.to_string()));
    }
    result
}

fn run_checks(
    settings: &Settings,
    reporter: &Reporter,
) -> Result<Vec<&'static str>, PreflightError> {
    let platforms = added_platforms(&settings.root);
    if platforms.is_empty() {
        return Err(PreflightError::NoPlatforms {
            root: settings.root.clone(),
        });
    }
    reporter.emit(PipelineEvent::CheckPassed(format!(
        "platforms found: {}",
        platforms.join(", ")
    )));

    let splash = settings.splash_file();
    if !splash.is_file() {
        return Err(PreflightError::SplashMissing(splash));
    }
    reporter.emit(PipelineEvent::CheckPassed(format!(
        "{} exists",
        splash.display()
    )));

    let config = settings.config_file();
    if !config.is_file() {
        return Err(PreflightError::ConfigMissing(config));
    }
    reporter.emit(PipelineEvent::CheckPassed(format!(
        "{} exists",
        config.display()
    )));

    Ok(platforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn project(platforms: &[&str], splash: bool, config: bool) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for p in platforms {
            fs::create_dir_all(tmp.path().join("platforms").join(p)).unwrap();
        }
        if splash {
            fs::write(tmp.path().join("splash.png"), b"png").unwrap();
        }
        if config {
            fs::write(tmp.path().join("config.xml"), "<widget/>").unwrap();
        }
        tmp
    }

    fn collect(root: &Path) -> (Result<Vec<&'static str>, PreflightError>, Vec<PipelineEvent>) {
        let (tx, rx) = std::sync::mpsc::channel();
        let reporter = Reporter::new(Some(tx));
        let result = check(&Settings::for_root(root), &reporter);
        drop(reporter);
        (result, rx.iter().collect())
    }

    #[test]
    fn all_checks_pass() {
        let tmp = project(&["ios", "android"], true, true);
        let (result, events) = collect(tmp.path());

        assert_eq!(result.unwrap(), vec!["ios", "android"]);
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            PipelineEvent::CheckPassed("platforms found: ios, android".into())
        );
        assert!(events.iter().all(|e| matches!(e, PipelineEvent::CheckPassed(_))));
    }

    #[test]
    fn no_platforms_fails_first() {
        // Splash and config are missing too; only the platform check reports.
        let tmp = project(&[], false, false);
        let (result, events) = collect(tmp.path());

        let err = result.unwrap_err();
        assert!(matches!(err, PreflightError::NoPlatforms { .. }));
        assert_eq!(err.kind(), ErrorKind::Environment);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], PipelineEvent::CheckFailed(m) if m.starts_with("No cordova platforms found")));
    }

    #[test]
    fn missing_splash_fails_second() {
        let tmp = project(&["android"], false, false);
        let (result, events) = collect(tmp.path());

        assert!(matches!(result, Err(PreflightError::SplashMissing(_))));
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], PipelineEvent::CheckFailed(_)));
    }

    #[test]
    fn missing_config_fails_third() {
        let tmp = project(&["windows"], true, false);
        let (result, events) = collect(tmp.path());

        let err = result.unwrap_err();
        assert!(matches!(err, PreflightError::ConfigMissing(_)));
        assert!(err.to_string().starts_with("cordova's "));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn splash_directory_is_not_a_source() {
        let tmp = project(&["ios"], false, true);
        fs::create_dir(tmp.path().join("splash.png")).unwrap();
        let (result, _) = collect(tmp.path());
        assert!(matches!(result, Err(PreflightError::SplashMissing(_))));
    }
}
