// Rust guideline compliant 2026-10-19

//! csvmerge CLI Application
//!
//! Merges two delimited files on a key column and reports the rows of the
//! second file that found no partner.

use anyhow::Context;
use clap::Parser;
use csvmerge_app::{MergePlan, RunContext};
use csvmerge_cli::commands::{self, merge::MergeOverrides};
use csvmerge_cli::{create_formatter, logging, should_use_color};
use csvmerge_core::OutputFormat;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "csvmerge",
    version,
    about = "Merge two CSV files on a key column",
    long_about = "csvmerge joins the rows of a first CSV file with the rows of a second one that share a key value. Keys are compared without regard to case or surrounding whitespace. The merged rows are written to output_<timestamp>.csv and the second file's unmatched rows to unmatched_<timestamp>.csv.",
    after_help = "Examples:\n  csvmerge\n  csvmerge files\n  csvmerge merge --first people.csv --second emails.csv --first-key id --second-key 1\n  csvmerge merge --first a.csv --second b.csv --first-key id --second-key id --batch --json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Working directory to search for input files
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Merge two files (the default when no command is given)
    Merge(MergeArgs),

    /// List candidate input files
    Files,
}

#[derive(Debug, Default, clap::Args)]
struct MergeArgs {
    /// First input file (prompted when omitted)
    #[arg(long)]
    first: Option<PathBuf>,

    /// Second input file (prompted when omitted)
    #[arg(long)]
    second: Option<PathBuf>,

    /// Key column of the first file, by name or 1-based number
    #[arg(long)]
    first_key: Option<String>,

    /// Key column of the second file, by name or 1-based number
    #[arg(long)]
    second_key: Option<String>,

    /// Directory for the output files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Field delimiter (single character or 'tab')
    #[arg(long)]
    delimiter: Option<String>,

    /// Reject rows whose width differs from the header
    #[arg(long)]
    strict_width: bool,

    /// Never prompt; missing choices are errors and ambiguous empty keys are skipped
    #[arg(long)]
    batch: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut ctx = RunContext::discover(cli.dir.as_deref(), cli.config.as_deref())
        .context("Failed to load configuration")?;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Merge(MergeArgs::default()));

    if let Some(level) = &cli.log_level {
        ctx.config_mut().log_level = level.clone();
    }
    if let Commands::Merge(args) = &command {
        let overrides = MergeOverrides {
            output_dir: args.output_dir.clone(),
            delimiter: args.delimiter.clone(),
            strict_width: args.strict_width,
        };
        overrides
            .apply(ctx.config_mut())
            .context("Invalid merge options")?;
    }
    logging::init_tracing(&ctx.config().log_level)?;

    let use_color = !cli.no_color && should_use_color();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        ctx.config().output_format
    };
    let formatter = create_formatter(format, use_color);

    let result = match command {
        Commands::Merge(args) => {
            let plan = MergePlan {
                first: args.first,
                second: args.second,
                first_key: args.first_key,
                second_key: args.second_key,
            };
            commands::merge::execute(&ctx, &plan, args.batch).map(|summary| {
                if format == OutputFormat::Table {
                    commands::merge::warn_dropped(&summary, use_color);
                }
                formatter.format_summary(&summary)
            })
        }
        Commands::Files => {
            commands::files::execute(&ctx).map(|files| formatter.format_candidates(&files))
        }
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(err) => {
            debug!(code = ?err.code(), "{}", err);
            eprintln!("{}", formatter.format_error(&err));
        }
    }

    Ok(())
}
