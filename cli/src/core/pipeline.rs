//! # sdvpack Pipeline
//!
//! File: cli/src/core/pipeline.rs
//!
//! ## Overview
//!
//! This module strings the stages together the way the commands use them:
//!
//! ```text
//! ConfigOverride.sdvextension ──► config::resolve ──┐
//!                                                   ├─► pack   (zip archive)
//! workspace ──► scan ──► filter (IgnoreFiles) ──────┤
//!                                                   └─► deploy (mirror copy)
//! ```
//!
//! Each run starts from scratch: configuration, scan and filtered entries are
//! recomputed for every invocation. Document reads are async; the scan, the
//! archive build and the mirror copy run on tokio's blocking pool and are
//! awaited one after another, so stages never overlap.
//!
//! Recoverable document problems are collected in the returned reports
//! (`problems`) instead of failing the run.
//!
use crate::common::archive::zip::{self, ArchiveReport};
use crate::common::fs::copy;
use crate::common::fs::io::read_optional_document;
use crate::common::fs::scan::{self, Entry};
use crate::core::config::{self, ResolvedConfig};
use crate::core::context::InvocationContext;
use crate::core::document::IGNORE_DOCUMENT;
use crate::core::error::{PackError, Result};
use crate::core::ignore::{self, IgnoreList};
use anyhow::Context;
use std::path::PathBuf;
use tracing::{debug, info};

/// Filtered workspace entries plus any recoverable ignore-document problem.
#[derive(Debug)]
pub struct FilteredWorkspace {
    pub entries: Vec<Entry>,
    pub scanned: usize,
    pub problem: Option<PackError>,
}

/// Outcome of `pack`.
#[derive(Debug)]
pub struct PackOutcome {
    pub archive: ArchiveReport,
    pub problems: Vec<PackError>,
}

/// Outcome of `deploy`.
#[derive(Debug)]
pub struct DeployOutcome {
    pub target: PathBuf,
    pub copied: usize,
    pub config: ResolvedConfig,
    pub problems: Vec<PackError>,
}

/// Scans the workspace and applies `IgnoreFiles.sdvextension`.
pub async fn filtered_workspace(ctx: &InvocationContext) -> Result<FilteredWorkspace> {
    let root = ctx.workspace()?.to_path_buf();

    let ignore_text = read_optional_document(&root.join(IGNORE_DOCUMENT))
        .await
        .with_context(|| format!("Failed to read {}", IGNORE_DOCUMENT))?;
    let load = IgnoreList::from_document(ignore_text.as_deref());

    let scan_root = root.clone();
    let scanned = tokio::task::spawn_blocking(move || scan::scan_workspace(&scan_root))
        .await
        .context("Workspace scan task failed")??;

    let entries = ignore::filter_entries(&scanned, &load.list);
    debug!(
        "{} of {} entries kept after {} ignore patterns",
        entries.len(),
        scanned.len(),
        load.list.len()
    );
    Ok(FilteredWorkspace {
        entries,
        scanned: scanned.len(),
        problem: load.problem,
    })
}

/// Builds the mod archive.
pub async fn pack(ctx: &InvocationContext) -> Result<PackOutcome> {
    let root = ctx.workspace()?.to_path_buf();
    let workspace_name = ctx.workspace_name()?;
    let filtered = filtered_workspace(ctx).await?;
    let resolution = config::load(ctx).await?;

    let mut problems = Vec::new();
    problems.extend(filtered.problem);
    problems.extend(resolution.problem);

    let cfg = resolution.config;
    let entries = filtered.entries;
    info!(
        "Packing {} ({} of {} entries) into {}",
        workspace_name,
        entries.len(),
        filtered.scanned,
        cfg.archive_output_dir.display()
    );
    let archive = tokio::task::spawn_blocking(move || {
        zip::build_archive(
            &entries,
            &root,
            &cfg.archive_output_dir,
            &workspace_name,
            &cfg.mod_version,
        )
    })
    .await
    .context("Archive task failed")??;

    Ok(PackOutcome { archive, problems })
}

/// Mirrors the filtered workspace into `<install root>/<workspace name>`.
pub async fn deploy(ctx: &InvocationContext) -> Result<DeployOutcome> {
    let root = ctx.workspace()?.to_path_buf();
    let workspace_name = ctx.workspace_name()?;
    let resolution = config::load(ctx).await?;
    let filtered = filtered_workspace(ctx).await?;

    let mut problems = Vec::new();
    problems.extend(resolution.problem);
    problems.extend(filtered.problem);

    let cfg = resolution.config;
    let target = cfg.install_root_dir.join(&workspace_name);
    let entries = filtered.entries;
    let copy_target = target.clone();
    let copied =
        tokio::task::spawn_blocking(move || copy::mirror_entries(&entries, &root, &copy_target))
            .await
            .context("Deploy task failed")??;

    Ok(DeployOutcome {
        target,
        copied,
        config: cfg,
        problems,
    })
}
