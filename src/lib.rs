//! # Splash Gen
//!
//! Generates every splash screen a Cordova project's platforms need from one
//! source image, and patches the platform files that reference them.
//!
//! # Architecture: Gated Pipeline
//!
//! ```text
//! 1. Preflight   platforms/ + splash + config.xml present?   (abort on first miss)
//! 2. Metadata    config.xml  →  project name
//! 3. Registry    project name  →  per-platform output dirs, assets, patches
//! 4. Schedule    ios → android → windows, each fanned out over rayon
//! ```
//!
//! Nothing is written until the first three stages succeed. After that, every
//! platform's crops and patches run as independent tasks; the run reports every
//! failure rather than stopping at the first.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run settings built from the command line |
//! | [`preflight`] | Ordered environment checks gating the run |
//! | [`metadata`] | Project name from `config.xml`, per-platform source resolution |
//! | [`platforms`] | Registry of supported platforms, their assets and patches |
//! | [`patch`] | Manifest patches: `Contents.json`, Android theme, stock splash removal |
//! | [`generate`] | One asset: directory, crop, size verification |
//! | [`pipeline`] | Stage sequencing, per-platform fan-out/fan-in, failure aggregation |
//! | [`imaging`] | Pure-Rust cover crop and PNG encoding behind a backend trait |
//! | [`events`] | Progress events sent from the pipeline to the CLI |
//! | [`output`] | CLI output formatting |
//! | [`types`] | Shared types: `AssetSpec`, `ErrorKind`, `Stage` |
//!
//! # Design Decisions
//!
//! ## Platforms as Data
//!
//! A platform is a static descriptor: probe directory, asset table, output
//! directory function, patch list. Adding a platform means adding one file
//! under `platforms/` and one registry entry; the scheduler never names a
//! platform.
//!
//! ## Library Never Prints
//!
//! Stages report through [`events::Reporter`]. The binary renders events on a
//! printer thread, and tests collect them from a channel to assert ordering.

pub mod config;
pub mod events;
pub mod generate;
pub mod imaging;
pub mod metadata;
pub mod output;
pub mod patch;
pub mod pipeline;
pub mod platforms;
pub mod preflight;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
