//! Progress events.
//!
//! The library never prints. Each stage reports what it did as a
//! [`PipelineEvent`] through a [`Reporter`]; the binary drains the channel on a
//! printer thread and renders lines with [`crate::output`].

use crate::patch::PatchOutcome;
use crate::types::{ErrorKind, Stage};
use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// One unit of work inside a platform's fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskId {
    /// An image crop, named by its output filename.
    Asset(&'static str),
    /// A manifest patch, named by its label.
    Patch(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Asset(filename) => f.write_str(filename),
            TaskId::Patch(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    StageChanged(Stage),
    CheckPassed(String),
    CheckFailed(String),
    PlatformStarted {
        platform: String,
        tasks: usize,
    },
    AssetGenerated {
        platform: String,
        filename: &'static str,
        path: PathBuf,
        width: u32,
        height: u32,
    },
    PatchApplied {
        platform: String,
        label: String,
        outcome: PatchOutcome,
    },
    TaskFailed {
        platform: String,
        task: TaskId,
        kind: ErrorKind,
        message: String,
    },
    PlatformFinished {
        platform: String,
        succeeded: usize,
        failed: usize,
    },
    /// Not run because an earlier platform failed under fail-fast.
    PlatformSkipped {
        platform: String,
    },
}

/// Optional event sink shared by every stage and worker.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    tx: Option<Sender<PipelineEvent>>,
}

impl Reporter {
    pub fn new(tx: Option<Sender<PipelineEvent>>) -> Self {
        Self { tx }
    }

    /// A reporter that drops everything.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Send an event. A closed receiver only loses the progress display.
    pub fn emit(&self, event: PipelineEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}
