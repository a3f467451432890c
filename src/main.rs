use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use shear::commands::prune::{self, PruneOptions};
use shear::completions::{generate_completions, Shell};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shear")]
#[command(about = "Prune merged and redundant git branches", long_about = None)]
#[command(version)]
struct Cli {
    /// Remote used to resolve the main branch
    #[arg(long, value_name = "NAME", default_value = prune::DEFAULT_REMOTE)]
    remote: String,

    /// Protect an additional branch from deletion (may be repeated)
    #[arg(long = "ignore", value_name = "BRANCH")]
    ignore: Vec<String>,

    /// Answer yes to every confirmation prompt
    #[arg(long, conflicts_with = "dry_run")]
    yes: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
        None => prune::execute(PruneOptions {
            remote: cli.remote,
            ignore: cli.ignore,
            yes: cli.yes,
            dry_run: cli.dry_run,
        }),
    }
}
