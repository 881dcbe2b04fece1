//! CLI argument definitions for the PMID to drug linker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use druglink_cli::logging::LogFormat;
use druglink_model::DEFAULT_NUM_SYNONYMS;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "druglink",
    version,
    about = "Link PMIDs to drugs",
    long_about = "Link PubMed records to a drug vocabulary.\n\n\
                  Titles and abstracts are scanned for each drug name and its synonyms\n\
                  (case-insensitive substring match). The result maps every drug to the\n\
                  PMIDs that mention it. Update runs also write a changelog of PMIDs\n\
                  newly linked since a previous mapping file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Hide the matching progress bar.
    #[arg(long = "no-progress", global = true)]
    pub no_progress: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a fresh drug to PMID mapping.
    Create(LinkArgs),

    /// Create a fresh mapping and a changelog against a previous mapping.
    Update(UpdateArgs),
}

/// Inputs shared by `create` and `update`.
#[derive(Args)]
pub struct LinkArgs {
    /// CSV or Excel workbook with PubMed IDs, titles and abstracts.
    ///
    /// Columns by position: A = PMID, B = year, C = title, D = abstract.
    /// The first row is a header and is skipped.
    #[arg(long = "pmids", value_name = "SHEET")]
    pub pmids: PathBuf,

    /// CSV or Excel workbook with drugs and optional synonyms.
    ///
    /// Columns by position: A = ID, B = drug name, C onwards = synonyms for
    /// the drug in column B. The first row is a header and is skipped.
    #[arg(long = "relevant-drugs", value_name = "SHEET")]
    pub relevant_drugs: PathBuf,

    /// File to write the drug to PMID mapping to.
    #[arg(long = "output", value_name = "CSV")]
    pub output: PathBuf,

    /// Number of synonym columns to load from the drug sheet.
    #[arg(long = "num-synonyms", value_name = "N", default_value_t = DEFAULT_NUM_SYNONYMS)]
    pub num_synonyms: usize,

    /// Run matching and print the summary without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub link: LinkArgs,

    /// Mapping file produced by a previous run.
    #[arg(long = "old-dataset", value_name = "CSV")]
    pub old_dataset: PathBuf,

    /// File to write newly linked PMIDs (new mapping minus old mapping) to.
    #[arg(long = "changelog-path", value_name = "CSV")]
    pub changelog_path: PathBuf,

    /// Also write PMIDs no longer linked (old mapping minus new mapping).
    #[arg(long = "removed-path", value_name = "CSV")]
    pub removed_path: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_requires_old_dataset_and_changelog() {
        let result = Cli::try_parse_from([
            "druglink",
            "update",
            "--pmids",
            "lit.csv",
            "--relevant-drugs",
            "drugs.csv",
            "--output",
            "out.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn create_defaults_to_four_synonyms() {
        let cli = Cli::try_parse_from([
            "druglink",
            "create",
            "--pmids",
            "lit.csv",
            "--relevant-drugs",
            "drugs.csv",
            "--output",
            "out.csv",
        ])
        .expect("parse create");
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.num_synonyms, 4);
        assert!(!args.dry_run);
    }
}
