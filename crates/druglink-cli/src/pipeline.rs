//! Create and update runs, from input files to written mapping files.
//!
//! Every input is loaded, matched and diffed, and every output rendered in
//! memory, before the first file is written. A failing run writes nothing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use druglink_core::{
    Changelog, MatchProgress, build_vocabulary, match_drugs_to_literature_with_progress,
};
use druglink_ingest::{
    RenderedMapping, ensure_exists, load_drug_rows, load_literature, read_mapping,
};
use druglink_model::{LinkOptions, MatchMapping};

/// Everything a run needs, independent of how it was requested.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    pub pmids: PathBuf,
    pub relevant_drugs: PathBuf,
    pub output: PathBuf,
    pub options: LinkOptions,
    pub update: Option<UpdateRequest>,
    /// Compute everything but write no file.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub old_dataset: PathBuf,
    pub changelog_path: PathBuf,
    pub removed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Mapping,
    Changelog,
    Removed,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mapping => "Mapping",
            Self::Changelog => "Changelog",
            Self::Removed => "Removed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub rows: usize,
    pub written: bool,
}

#[derive(Debug)]
pub struct RunReport {
    pub record_count: usize,
    pub drug_count: usize,
    pub synonym_count: usize,
    pub mapping: MatchMapping,
    pub changelog: Option<Changelog>,
    pub outputs: Vec<OutputFile>,
}

impl RunReport {
    pub fn is_update(&self) -> bool {
        self.changelog.is_some()
    }
}

struct PendingOutput {
    kind: OutputKind,
    path: PathBuf,
    rendered: RenderedMapping,
}

fn render(
    kind: OutputKind,
    path: &Path,
    rendered: druglink_ingest::Result<RenderedMapping>,
) -> Result<PendingOutput> {
    let rendered = rendered.with_context(|| format!("render {}", path.display()))?;
    Ok(PendingOutput {
        kind,
        path: path.to_path_buf(),
        rendered,
    })
}

/// Run a create or update.
pub fn run_link<F>(request: &LinkRequest, on_progress: F) -> Result<RunReport>
where
    F: FnMut(MatchProgress),
{
    let mode = if request.update.is_some() {
        "update"
    } else {
        "create"
    };
    let run_span = info_span!("link", mode, dry_run = request.dry_run);
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 0: Check every required input before doing any work
    // =========================================================================
    ensure_exists(&request.pmids).context("literature sheet")?;
    ensure_exists(&request.relevant_drugs).context("drug sheet")?;
    if let Some(update) = &request.update {
        ensure_exists(&update.old_dataset).context("previous mapping")?;
    }

    // =========================================================================
    // Stage 1: Ingest - literature, drug vocabulary and the previous mapping
    // =========================================================================
    let ingest_start = Instant::now();
    let records = load_literature(&request.pmids)
        .with_context(|| format!("load literature: {}", request.pmids.display()))?;
    let drug_rows = load_drug_rows(&request.relevant_drugs, &request.options)
        .with_context(|| format!("load drugs: {}", request.relevant_drugs.display()))?;
    let vocabulary = build_vocabulary(&drug_rows);
    let previous = match &request.update {
        Some(update) => Some(
            read_mapping(&update.old_dataset).with_context(|| {
                format!("load previous mapping: {}", update.old_dataset.display())
            })?,
        ),
        None => None,
    };
    info!(
        record_count = records.len(),
        drug_count = vocabulary.len(),
        synonym_count = vocabulary.synonym_count(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Match literature against the vocabulary
    // =========================================================================
    let match_start = Instant::now();
    let mapping = match_drugs_to_literature_with_progress(&records, &vocabulary, on_progress);
    info!(
        matched_drugs = mapping.len(),
        link_count = mapping.link_count(),
        duration_ms = match_start.elapsed().as_millis(),
        "matching complete"
    );

    // =========================================================================
    // Stage 3: Diff against the previous mapping (update only)
    // =========================================================================
    let changelog = previous.as_ref().map(|previous| {
        let changelog = Changelog::between(previous, &mapping);
        info!(
            drugs_with_additions = changelog.added.changed_count(),
            added_pmids = changelog.added.pmid_count(),
            removed_pmids = changelog.removed.pmid_count(),
            "changelog computed"
        );
        changelog
    });

    // =========================================================================
    // Stage 4: Render all outputs, then write them
    // =========================================================================
    let mut pending = vec![render(
        OutputKind::Mapping,
        &request.output,
        RenderedMapping::from_mapping(&mapping),
    )?];
    if let (Some(update), Some(changelog)) = (&request.update, &changelog) {
        pending.push(render(
            OutputKind::Changelog,
            &update.changelog_path,
            RenderedMapping::from_diff(&changelog.added),
        )?);
        if let Some(removed_path) = &update.removed_path {
            pending.push(render(
                OutputKind::Removed,
                removed_path,
                RenderedMapping::from_diff(&changelog.removed),
            )?);
        }
    }

    let mut outputs = Vec::with_capacity(pending.len());
    for output in pending {
        if !request.dry_run {
            output.rendered.write_to(&output.path).with_context(|| {
                format!("write {}", output.kind.label().to_lowercase())
            })?;
            info!(
                kind = output.kind.label(),
                path = %output.path.display(),
                rows = output.rendered.row_count,
                "output written"
            );
        }
        outputs.push(OutputFile {
            kind: output.kind,
            path: output.path,
            rows: output.rendered.row_count,
            written: !request.dry_run,
        });
    }

    Ok(RunReport {
        record_count: records.len(),
        drug_count: vocabulary.len(),
        synonym_count: vocabulary.synonym_count(),
        mapping,
        changelog,
        outputs,
    })
}
