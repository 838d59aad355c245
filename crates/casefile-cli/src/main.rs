use std::path::{Path, PathBuf};

use anyhow::Context;
use casefile_core::Parties;
use casefile_pdf::{BatchRunner, CollisionPolicy, PdfTextSource, RunConfig, list_pdfs, plan_file};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod display;

#[derive(Parser)]
#[command(name = "casefile")]
#[command(version, about = "Rename legal PDFs after their date, title, parties and author")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rename every PDF in the target folder
    Rename {
        /// Folder scanned (non-recursively) for *.pdf files
        #[arg(long, env = "TARGET_FOLDER", default_value = "./docs")]
        target_folder: PathBuf,

        #[command(flatten)]
        parties: PartyArgs,

        /// Report the new names without renaming anything
        #[arg(long)]
        dry_run: bool,

        /// What to do when the new name belongs to another file
        #[arg(long, value_enum, default_value_t = OnCollision::Error)]
        on_collision: OnCollision,
    },

    /// Print the metadata extracted from one PDF
    Inspect {
        file: PathBuf,

        #[command(flatten)]
        parties: PartyArgs,

        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct PartyArgs {
    /// Our client, first party in the filename
    #[arg(long, env = "CLIENT_NAME")]
    client_name: String,

    /// Opposing party, second in the filename
    #[arg(long, env = "OPPONENT_NAME")]
    opponent_name: String,

    /// Case number used when a document has none in its first 500 characters
    #[arg(long, env = "DEFAULT_CASE_NUM", default_value = "")]
    default_case_num: String,
}

impl PartyArgs {
    fn into_parties(self) -> Parties {
        Parties::new(self.client_name, self.opponent_name)
            .with_default_case_number(self.default_case_num)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnCollision {
    Error,
    Suffix,
    Overwrite,
}

impl From<OnCollision> for CollisionPolicy {
    fn from(value: OnCollision) -> Self {
        match value {
            OnCollision::Error => CollisionPolicy::Error,
            OnCollision::Suffix => CollisionPolicy::Suffix,
            OnCollision::Overwrite => CollisionPolicy::Overwrite,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    tracing::debug!("casefile v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Rename {
            target_folder,
            parties,
            dry_run,
            on_collision,
        } => {
            let config = RunConfig {
                target_folder,
                parties: parties.into_parties(),
                collision: on_collision.into(),
                dry_run,
            };
            cmd_rename(config)
        }
        Command::Inspect {
            file,
            parties,
            json,
        } => cmd_inspect(&file, &parties.into_parties(), json),
    }
}

fn cmd_rename(config: RunConfig) -> anyhow::Result<()> {
    let folder = config.target_folder.clone();
    let dry_run = config.dry_run;
    let runner = BatchRunner::new(PdfTextSource, config);

    let files = list_pdfs(&folder)?;
    if files.is_empty() {
        display::print_no_files(&folder);
        return Ok(());
    }
    display::print_start(files.len(), dry_run);

    let summary = runner
        .run(&files, display::print_outcome)
        .with_context(|| format!("renaming PDFs in {}", folder.display()))?;
    display::print_summary(&summary);
    Ok(())
}

fn cmd_inspect(file: &Path, parties: &Parties, json: bool) -> anyhow::Result<()> {
    let plan = plan_file(file, &PdfTextSource, parties)
        .with_context(|| format!("inspecting {}", file.display()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display::print_plan_card(&plan);
    }
    Ok(())
}
