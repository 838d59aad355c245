//! Sequential batch renamer.
//!
//! Each PDF in the target folder is read, extracted, planned and renamed
//! before the next one is touched. The first error aborts the run; files
//! already renamed stay renamed.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use casefile_core::{ExtractedMetadata, Parties, compose_filename};
use serde::Serialize;
use tracing::{info, warn};

use crate::{BatchError, TextSource};

/// What to do when the target name is already taken by a different file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Abort the run.
    #[default]
    Error,
    /// Append ` (2)`, ` (3)`, ... to the stem until the name is free.
    Suffix,
    /// Replace the existing file.
    Overwrite,
}

/// Everything a run needs; built by the CLI from flags and environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_folder: PathBuf,
    pub parties: Parties,
    pub collision: CollisionPolicy,
    /// Plan and report without touching the filesystem.
    pub dry_run: bool,
}

/// Source path paired with its computed target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub target: PathBuf,
    pub metadata: ExtractedMetadata,
}

impl RenamePlan {
    /// Build the plan for a file whose text has already been extracted.
    pub fn new(source: &Path, text: &str, parties: &Parties) -> Self {
        let metadata = parties.extract(text);
        let file_name = compose_filename(&metadata, &parties.client, &parties.opponent);
        let target = match source.parent() {
            Some(dir) => dir.join(&file_name),
            None => PathBuf::from(&file_name),
        };
        Self {
            source: source.to_path_buf(),
            target,
            metadata,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.source == self.target
    }

    pub fn target_name(&self) -> &str {
        self.target
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
    }
}

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Renamed { from: PathBuf, to: PathBuf },
    Unchanged { path: PathBuf },
    /// Dry run: `to` is where the file would go.
    Planned { from: PathBuf, to: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub planned: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Renamed { .. } => self.renamed += 1,
            Outcome::Unchanged { .. } => self.unchanged += 1,
            Outcome::Planned { .. } => self.planned += 1,
        }
    }
}

/// Files in `dir` whose name ends in `.pdf` (any case), sorted by name.
///
/// Not recursive; subdirectories are skipped even if their name matches.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let read_dir_err = |source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .ends_with(".pdf");
        if is_pdf {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read `path`, extract its text and compute where it should go.
pub fn plan_file(
    path: &Path,
    source: &impl TextSource,
    parties: &Parties,
) -> Result<RenamePlan, BatchError> {
    let bytes = fs::read(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = source
        .extract_text(&bytes)
        .map_err(|source| BatchError::Extract {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(RenamePlan::new(path, &text, parties))
}

/// Where `plan` should land under `policy`, given which names are taken.
fn resolve_target(
    plan: &RenamePlan,
    policy: CollisionPolicy,
    is_taken: impl Fn(&Path) -> bool,
) -> Result<PathBuf, BatchError> {
    let target = plan.target.clone();
    if !is_taken(&target) {
        return Ok(target);
    }
    match policy {
        CollisionPolicy::Error => Err(BatchError::Collision {
            from: plan.source.clone(),
            to: target,
        }),
        CollisionPolicy::Suffix => {
            let suffixed = free_suffixed(&target, &is_taken);
            warn!(target = %suffixed.display(), "target taken, using suffixed name");
            Ok(suffixed)
        }
        CollisionPolicy::Overwrite => {
            warn!(target = %target.display(), "overwriting existing file");
            Ok(target)
        }
    }
}

/// Commit a plan to disk under the given collision policy.
pub fn apply_plan(plan: &RenamePlan, policy: CollisionPolicy) -> Result<Outcome, BatchError> {
    if plan.is_noop() {
        return Ok(Outcome::Unchanged {
            path: plan.source.clone(),
        });
    }

    let target = resolve_target(plan, policy, |p| {
        p.exists() && !same_file(&plan.source, p)
    })?;

    fs::rename(&plan.source, &target).map_err(|source| BatchError::Rename {
        from: plan.source.clone(),
        to: target.clone(),
        source,
    })?;
    info!(from = %plan.source.display(), to = %target.display(), "renamed");
    Ok(Outcome::Renamed {
        from: plan.source.clone(),
        to: target,
    })
}

/// Dry-run counterpart of [`apply_plan`].
///
/// Nothing moves on disk, so targets claimed earlier in the same run are
/// tracked in `claimed` and count as taken alongside existing files.
pub fn preview_plan(
    plan: &RenamePlan,
    policy: CollisionPolicy,
    claimed: &mut HashSet<PathBuf>,
) -> Result<Outcome, BatchError> {
    if plan.is_noop() {
        claimed.insert(plan.source.clone());
        return Ok(Outcome::Unchanged {
            path: plan.source.clone(),
        });
    }

    let target = resolve_target(plan, policy, |p| {
        claimed.contains(p) || (p.exists() && !same_file(&plan.source, p))
    })?;
    claimed.insert(target.clone());
    Ok(Outcome::Planned {
        from: plan.source.clone(),
        to: target,
    })
}

/// Sequential runner over one folder.
pub struct BatchRunner<S> {
    source: S,
    config: RunConfig,
}

impl<S: TextSource> BatchRunner<S> {
    pub fn new(source: S, config: RunConfig) -> Self {
        Self { source, config }
    }

    /// Process `files` in order, calling `report` after each one.
    ///
    /// Stops at the first error. An empty list is not an error: the summary
    /// has `total == 0`.
    pub fn run(
        &self,
        files: &[PathBuf],
        mut report: impl FnMut(&Outcome),
    ) -> Result<BatchSummary, BatchError> {
        let mut summary = BatchSummary {
            total: files.len(),
            ..Default::default()
        };
        info!(count = files.len(), dry_run = self.config.dry_run, "processing pdf files");

        let mut claimed = HashSet::new();
        for path in files {
            let plan = plan_file(path, &self.source, &self.config.parties)?;
            let outcome = if self.config.dry_run {
                preview_plan(&plan, self.config.collision, &mut claimed)?
            } else {
                apply_plan(&plan, self.config.collision)?
            };
            summary.record(&outcome);
            report(&outcome);
        }
        Ok(summary)
    }
}

/// `true` when both paths resolve to the same file (e.g. a case-only rename
/// on a case-insensitive filesystem).
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// First `stem (n).ext` next to `target` that is not taken, from n = 2.
fn free_suffixed(target: &Path, is_taken: impl Fn(&Path) -> bool) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = target
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let mut n = 2;
    loop {
        let candidate = target.with_file_name(format!("{stem} ({n}){ext}"));
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
