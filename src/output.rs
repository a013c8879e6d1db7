//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//!
//!  Checking Project & Splash
//!
//!   ✓  platforms found: ios, android
//!   ✓  ./splash.png exists
//!   ✓  ./config.xml exists
//!
//!  Generating splash screen for ios
//!
//!   ✓  Default@1x~universal.png created (1366×1366)
//!   ✓  updated Contents.json
//!   ✗  Default@3x~universal.png: ... (I/O error)
//!   ✗  1 of 4 tasks failed
//! ```
//!
//! Lines within a platform appear in completion order, which varies between
//! runs; the set of lines does not.
//!
//! # Architecture
//!
//! Each event has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout or stderr. Format functions
//! are pure: no I/O, no side effects.

use crate::events::{PipelineEvent, TaskId};
use crate::patch::PatchOutcome;
use crate::pipeline::{PipelineError, ScheduleOutcome};
use crate::types::Stage;

fn success(message: &str) -> String {
    format!("  \u{2713}  {message}")
}

fn failure(message: &str) -> String {
    format!("  \u{2717}  {message}")
}

fn header(title: &str) -> Vec<String> {
    vec![String::new(), format!(" {title}"), String::new()]
}

fn task_label(task: &TaskId) -> String {
    match task {
        TaskId::Asset(filename) => filename.to_string(),
        TaskId::Patch(label) => format!("{label} patch"),
    }
}

/// Format a single pipeline event as display lines.
pub fn format_event(event: &PipelineEvent) -> Vec<String> {
    match event {
        PipelineEvent::StageChanged(stage @ (Stage::Validating | Stage::Generating { .. })) => {
            header(&stage.to_string())
        }
        PipelineEvent::StageChanged(_) => Vec::new(),
        PipelineEvent::CheckPassed(message) => vec![success(message)],
        PipelineEvent::CheckFailed(message) => vec![failure(message)],
        PipelineEvent::PlatformStarted { .. } => Vec::new(),
        PipelineEvent::AssetGenerated {
            filename,
            width,
            height,
            ..
        } => vec![success(&format!(
            "{filename} created ({width}\u{00d7}{height})"
        ))],
        PipelineEvent::PatchApplied { label, outcome, .. } => {
            let message = match outcome {
                PatchOutcome::Updated(_) => format!("updated {label}"),
                PatchOutcome::Removed(_) => format!("removed {label}"),
                PatchOutcome::AlreadyAbsent(_) => format!("{label} already absent"),
            };
            vec![success(&message)]
        }
        PipelineEvent::TaskFailed {
            task,
            kind,
            message,
            ..
        } => vec![failure(&format!("{}: {message} ({kind})", task_label(task)))],
        PipelineEvent::PlatformFinished {
            succeeded, failed, ..
        } => {
            if *failed == 0 {
                Vec::new()
            } else {
                vec![failure(&format!(
                    "{failed} of {} tasks failed",
                    succeeded + failed
                ))]
            }
        }
        PipelineEvent::PlatformSkipped { platform } => {
            vec![failure(&format!("{platform} skipped after earlier failure"))]
        }
    }
}

/// Print a pipeline event to stdout.
pub fn print_event(event: &PipelineEvent) {
    for line in format_event(event) {
        println!("{}", line);
    }
}

/// Summary of a successful run.
pub fn format_summary(outcome: &ScheduleOutcome) -> Vec<String> {
    let assets: usize = outcome.completed.iter().map(|r| r.assets.len()).sum();
    let patches: usize = outcome.completed.iter().map(|r| r.patches.len()).sum();
    let platforms: Vec<&str> = outcome.completed.iter().map(|r| r.platform).collect();
    vec![
        String::new(),
        format!(
            "Generated {assets} splash screens and applied {patches} patches for {}",
            platforms.join(", ")
        ),
    ]
}

pub fn print_summary(outcome: &ScheduleOutcome) {
    for line in format_summary(outcome) {
        println!("{}", line);
    }
}

/// One line per failure, for stderr.
///
/// A generation failure lists every platform that completed, every failed
/// task of every failed platform, then every skipped platform.
pub fn format_error(err: &PipelineError) -> Vec<String> {
    let PipelineError::Generation(outcome) = err else {
        return vec![format!("error ({}): {err}", err.kind())];
    };

    let mut lines = vec![format!("error: {err}")];
    for report in &outcome.completed {
        lines.push(format!(
            "  {}: completed ({} assets)",
            report.platform,
            report.assets.len()
        ));
    }
    for platform in &outcome.failed {
        lines.push(format!("  {platform}"));
        for f in &platform.failures {
            lines.push(format!(
                "    {}: {} ({})",
                task_label(&f.task),
                f.error,
                f.error.kind()
            ));
        }
    }
    for platform in &outcome.skipped {
        lines.push(format!("  {platform}: skipped"));
    }
    lines
}

pub fn print_error(err: &PipelineError) {
    for line in format_error(err) {
        eprintln!("{}", line);
    }
}
