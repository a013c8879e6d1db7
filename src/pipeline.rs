//! Pipeline scheduler and per-platform orchestrator.
//!
//! ```text
//! Settings ─→ preflight ─→ project name ─→ registry ─→ ios ─→ android ─→ windows
//!                                                       │
//!                                    ┌──────────────────┼───────────────────┐
//!                                  crop 1   …   crop n   patch 1  …  patch m   (rayon)
//!                                    └──────────────────┼───────────────────┘
//!                                                  platform result
//! ```
//!
//! Platforms run one after another in registry order. Inside a platform every
//! asset crop and every manifest patch is an independent task; they fan out
//! over the rayon pool and the platform result is only produced once all of
//! them have settled. A failing task never cancels its siblings: the platform
//! fails with every collected failure attached.
//!
//! By default a failed platform does not stop the next one, so a single run
//! reports every broken platform. With fail-fast the remaining platforms are
//! skipped instead.

use crate::config::{ConfigError, Settings};
use crate::events::{PipelineEvent, Reporter, TaskId};
use crate::generate::{AssetError, GeneratedAsset, generate_asset};
use crate::imaging::{ImageBackend, RustBackend};
use crate::metadata::{MetadataError, ProjectContext, read_project_name};
use crate::patch::{ManifestPatch, PatchError, PatchOutcome};
use crate::platforms::{PlatformSpec, build_registry};
use crate::preflight::{self, PreflightError};
use crate::types::{AssetSpec, ErrorKind, Stage};
use rayon::prelude::*;
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Patch(#[from] PatchError),
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Asset(e) => e.kind(),
            TaskError::Patch(e) => e.kind(),
        }
    }
}

#[derive(Debug)]
pub struct TaskFailure {
    pub task: TaskId,
    pub error: TaskError,
}

/// Everything a successful platform produced.
#[derive(Debug)]
pub struct PlatformReport {
    pub platform: &'static str,
    pub assets: Vec<GeneratedAsset>,
    pub patches: Vec<(String, PatchOutcome)>,
}

/// A platform with at least one failed task.
#[derive(Debug)]
pub struct PlatformFailure {
    pub platform: &'static str,
    pub succeeded: usize,
    pub failures: Vec<TaskFailure>,
}

impl fmt::Display for PlatformFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} tasks failed",
            self.platform,
            self.failures.len(),
            self.succeeded + self.failures.len()
        )
    }
}

/// Result of scheduling every added platform.
#[derive(Debug, Default)]
pub struct ScheduleOutcome {
    pub completed: Vec<PlatformReport>,
    pub failed: Vec<PlatformFailure>,
    /// Platforms not attempted because fail-fast tripped.
    pub skipped: Vec<&'static str>,
}

impl ScheduleOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.iter().map(|p| p.failures.len()).sum()
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Preflight(#[from] PreflightError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("{} platform(s) failed with {} error(s)", .0.failed.len(), .0.failure_count())]
    Generation(ScheduleOutcome),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Config(_) => ErrorKind::Environment,
            PipelineError::Preflight(e) => e.kind(),
            PipelineError::Metadata(e) => e.kind(),
            // Parse when any task met a malformed document, Io otherwise.
            PipelineError::Generation(outcome) => {
                let any_parse = outcome
                    .failed
                    .iter()
                    .flat_map(|p| &p.failures)
                    .any(|f| f.error.kind() == ErrorKind::Parse);
                if any_parse {
                    ErrorKind::Parse
                } else {
                    ErrorKind::Io
                }
            }
        }
    }
}

/// Run the whole pipeline with the production image backend.
pub fn run(settings: &Settings, reporter: &Reporter) -> Result<ScheduleOutcome, PipelineError> {
    run_with_backend(&RustBackend::new(), settings, reporter)
}

/// Run the whole pipeline with a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    settings: &Settings,
    reporter: &Reporter,
) -> Result<ScheduleOutcome, PipelineError> {
    let result = run_stages(backend, settings, reporter);
    let last = if result.is_ok() {
        Stage::Done
    } else {
        Stage::Failed
    };
    reporter.emit(PipelineEvent::StageChanged(last));
    result
}

fn run_stages(
    backend: &impl ImageBackend,
    settings: &Settings,
    reporter: &Reporter,
) -> Result<ScheduleOutcome, PipelineError> {
    settings.validate()?;

    reporter.emit(PipelineEvent::StageChanged(Stage::Validating));
    preflight::check(settings, reporter)?;

    reporter.emit(PipelineEvent::StageChanged(Stage::ReadingMetadata));
    let name = read_project_name(&settings.config_file())?;

    reporter.emit(PipelineEvent::StageChanged(Stage::BuildingRegistry));
    let registry = build_registry(&settings.root, &name);
    let ctx = ProjectContext::new(name, settings.splash_file());

    let outcome = run_platforms(backend, &ctx, &registry, settings.fail_fast, reporter);
    if outcome.is_success() {
        Ok(outcome)
    } else {
        Err(PipelineError::Generation(outcome))
    }
}

/// Run every added platform in order.
pub fn run_platforms(
    backend: &impl ImageBackend,
    ctx: &ProjectContext,
    platforms: &[PlatformSpec],
    fail_fast: bool,
    reporter: &Reporter,
) -> ScheduleOutcome {
    let mut outcome = ScheduleOutcome::default();

    for (index, platform) in platforms.iter().filter(|p| p.is_added).enumerate() {
        if fail_fast && !outcome.failed.is_empty() {
            reporter.emit(PipelineEvent::PlatformSkipped {
                platform: platform.name.to_string(),
            });
            outcome.skipped.push(platform.name);
            continue;
        }

        reporter.emit(PipelineEvent::StageChanged(Stage::Generating {
            index,
            platform: platform.name.to_string(),
        }));
        match run_platform(backend, ctx, platform, reporter) {
            Ok(report) => outcome.completed.push(report),
            Err(failure) => outcome.failed.push(failure),
        }
    }

    outcome
}

enum Task<'a> {
    Asset(&'a AssetSpec),
    Patch(&'a dyn ManifestPatch),
}

enum TaskDone {
    Asset(GeneratedAsset),
    Patch(String, PatchOutcome),
}

/// Fan one platform out into its assets and patches, then join.
pub fn run_platform(
    backend: &impl ImageBackend,
    ctx: &ProjectContext,
    platform: &PlatformSpec,
    reporter: &Reporter,
) -> Result<PlatformReport, PlatformFailure> {
    let source = ctx.source_for(platform.name);
    reporter.emit(PipelineEvent::PlatformStarted {
        platform: platform.name.to_string(),
        tasks: platform.task_count(),
    });

    let tasks: Vec<Task<'_>> = platform
        .assets
        .iter()
        .map(Task::Asset)
        .chain(platform.patches.iter().map(|p| Task::Patch(p.as_ref())))
        .collect();

    let results: Vec<Result<TaskDone, TaskFailure>> = tasks
        .par_iter()
        .map(|task| run_task(backend, &source, platform, task, reporter))
        .collect();

    let mut assets = Vec::new();
    let mut patches = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(TaskDone::Asset(asset)) => assets.push(asset),
            Ok(TaskDone::Patch(label, outcome)) => patches.push((label, outcome)),
            Err(failure) => failures.push(failure),
        }
    }

    let succeeded = assets.len() + patches.len();
    reporter.emit(PipelineEvent::PlatformFinished {
        platform: platform.name.to_string(),
        succeeded,
        failed: failures.len(),
    });

    if failures.is_empty() {
        Ok(PlatformReport {
            platform: platform.name,
            assets,
            patches,
        })
    } else {
        Err(PlatformFailure {
            platform: platform.name,
            succeeded,
            failures,
        })
    }
}

fn run_task(
    backend: &impl ImageBackend,
    source: &Path,
    platform: &PlatformSpec,
    task: &Task<'_>,
    reporter: &Reporter,
) -> Result<TaskDone, TaskFailure> {
    let result = match task {
        Task::Asset(asset) => generate_asset(backend, source, platform, asset)
            .map(|generated| {
                reporter.emit(PipelineEvent::AssetGenerated {
                    platform: platform.name.to_string(),
                    filename: generated.filename,
                    path: generated.path.clone(),
                    width: generated.width,
                    height: generated.height,
                });
                TaskDone::Asset(generated)
            })
            .map_err(|e| (TaskId::Asset(asset.filename), TaskError::from(e))),
        Task::Patch(patch) => patch
            .apply()
            .map(|outcome| {
                reporter.emit(PipelineEvent::PatchApplied {
                    platform: platform.name.to_string(),
                    label: patch.label().to_string(),
                    outcome: outcome.clone(),
                });
                TaskDone::Patch(patch.label().to_string(), outcome)
            })
            .map_err(|e| (TaskId::Patch(patch.label().to_string()), TaskError::from(e))),
    };

    result.map_err(|(task, error)| {
        reporter.emit(PipelineEvent::TaskFailed {
            platform: platform.name.to_string(),
            task: task.clone(),
            kind: error.kind(),
            message: error.to_string(),
        });
        TaskFailure { task, error }
    })
}
