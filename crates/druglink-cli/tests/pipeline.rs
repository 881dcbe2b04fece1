//! Integration tests for create and update runs.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use druglink_cli::pipeline::{LinkRequest, OutputKind, UpdateRequest, run_link};
use druglink_model::LinkOptions;

const LITERATURE: &str = "\
PMID,Year,Title,Abstract
31587145,2019,Caffeine and midazolam interaction,Midazolam clearance was reduced.
32840724,2020,Sedation in the ICU,Patients received DORMICUM or dexmedetomidine.
";

const DRUGS: &str = "\
ID,Drug,Synonym 1,Synonym 2
1,Midazolam,Dormicum,
2,Caffeine,,
3,Warfarin,Coumadin,
";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("literature.csv"), LITERATURE).expect("write literature");
        fs::write(dir.path().join("drugs.csv"), DRUGS).expect("write drugs");
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn request(&self) -> LinkRequest {
        LinkRequest {
            pmids: self.path("literature.csv"),
            relevant_drugs: self.path("drugs.csv"),
            output: self.path("mapping.csv"),
            options: LinkOptions::new().with_num_synonyms(2),
            update: None,
            dry_run: false,
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output")
}

#[test]
fn create_writes_mapping_in_match_order() {
    let workspace = Workspace::new();

    let report = run_link(&workspace.request(), |_| {}).expect("create run");

    assert_eq!(report.record_count, 2);
    assert_eq!(report.drug_count, 3);
    assert_eq!(report.synonym_count, 2);
    assert!(!report.is_update());
    assert_eq!(
        read(&workspace.path("mapping.csv")),
        "midazolam,\"31587145,32840724\"\ncaffeine,31587145\n"
    );
    assert_eq!(report.outputs.len(), 1);
    assert_eq!(report.outputs[0].kind, OutputKind::Mapping);
    assert_eq!(report.outputs[0].rows, 2);
    assert!(report.outputs[0].written);
}

#[test]
fn update_writes_changelog_and_removed_files() {
    let workspace = Workspace::new();
    fs::write(
        workspace.path("old.csv"),
        "midazolam,31587145\nwarfarin,30000001\n",
    )
    .expect("write old mapping");
    let mut request = workspace.request();
    request.update = Some(UpdateRequest {
        old_dataset: workspace.path("old.csv"),
        changelog_path: workspace.path("changelog.csv"),
        removed_path: Some(workspace.path("removed.csv")),
    });

    let report = run_link(&request, |_| {}).expect("update run");

    assert!(report.is_update());
    assert_eq!(
        read(&workspace.path("changelog.csv")),
        "midazolam,32840724\ncaffeine,31587145\n"
    );
    assert_eq!(read(&workspace.path("removed.csv")), "warfarin,30000001\n");
    let kinds: Vec<OutputKind> = report.outputs.iter().map(|output| output.kind).collect();
    assert_eq!(
        kinds,
        vec![OutputKind::Mapping, OutputKind::Changelog, OutputKind::Removed]
    );
}

#[test]
fn dry_run_writes_nothing() {
    let workspace = Workspace::new();
    let mut request = workspace.request();
    request.dry_run = true;

    let report = run_link(&request, |_| {}).expect("dry run");

    assert!(!workspace.path("mapping.csv").exists());
    assert_eq!(report.outputs[0].rows, 2);
    assert!(!report.outputs[0].written);
}

#[test]
fn missing_previous_mapping_fails_before_writing() {
    let workspace = Workspace::new();
    let mut request = workspace.request();
    request.update = Some(UpdateRequest {
        old_dataset: workspace.path("absent.csv"),
        changelog_path: workspace.path("changelog.csv"),
        removed_path: None,
    });

    let error = run_link(&request, |_| {}).expect_err("missing old dataset");

    assert!(format!("{error:#}").contains("absent.csv"));
    assert!(!workspace.path("mapping.csv").exists());
    assert!(!workspace.path("changelog.csv").exists());
}

#[test]
fn too_many_synonyms_is_rejected_before_matching() {
    let workspace = Workspace::new();
    let mut request = workspace.request();
    request.options = LinkOptions::new().with_num_synonyms(4);
    let mut progress_calls = 0;

    let result = run_link(&request, |_| progress_calls += 1);

    assert!(result.is_err());
    assert_eq!(progress_calls, 0);
    assert!(!workspace.path("mapping.csv").exists());
}

#[test]
fn progress_is_reported_per_record() {
    let workspace = Workspace::new();
    let mut seen = Vec::new();

    run_link(&workspace.request(), |progress| seen.push(progress.processed)).expect("create run");

    assert_eq!(seen, vec![1, 2]);
}
