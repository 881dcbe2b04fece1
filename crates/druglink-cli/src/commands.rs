use anyhow::Result;
use tracing::debug;

use druglink_cli::pipeline::{LinkRequest, RunReport, UpdateRequest, run_link};
use druglink_model::LinkOptions;

use crate::cli::{LinkArgs, UpdateArgs};
use crate::progress::MatchProgressBar;

pub fn run_create(args: &LinkArgs, show_progress: bool) -> Result<RunReport> {
    run(link_request(args, None), show_progress)
}

pub fn run_update(args: &UpdateArgs, show_progress: bool) -> Result<RunReport> {
    let update = UpdateRequest {
        old_dataset: args.old_dataset.clone(),
        changelog_path: args.changelog_path.clone(),
        removed_path: args.removed_path.clone(),
    };
    run(link_request(&args.link, Some(update)), show_progress)
}

fn link_request(args: &LinkArgs, update: Option<UpdateRequest>) -> LinkRequest {
    LinkRequest {
        pmids: args.pmids.clone(),
        relevant_drugs: args.relevant_drugs.clone(),
        output: args.output.clone(),
        options: LinkOptions::new().with_num_synonyms(args.num_synonyms),
        update,
        dry_run: args.dry_run,
    }
}

fn run(request: LinkRequest, show_progress: bool) -> Result<RunReport> {
    debug!(?request, "starting run");
    let mut progress = MatchProgressBar::new(show_progress);
    let result = run_link(&request, |step| progress.update(step));
    progress.finish();
    result
}
