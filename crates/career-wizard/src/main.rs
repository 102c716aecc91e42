//! Career Path Advisor CLI
//!
//! # Usage
//!
//! ```bash
//! # Interactive questionnaire (default)
//! career-wizard
//!
//! # Non-interactive recommendation for a saved profile
//! career-wizard recommend --profile student.json
//!
//! # Degree programs for a background
//! career-wizard programs ICS
//!
//! # Custom configuration
//! ADVISOR_ARTIFACT_DIR=./model career-wizard --config advisor.toml
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use advisor::{programs_for, AdvisorConfig, Background, InferenceEngine, RecordStore, ResaveOutcome};
use anyhow::{Context, Result};
use career_wizard::{render, Console};
use clap::{Parser, Subcommand};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an advisor TOML config (environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive questionnaire
    Wizard,

    /// Rank careers for a StudentProfile JSON file ("-" reads stdin)
    Recommend {
        #[arg(long)]
        profile: PathBuf,
    },

    /// List the degree programs suggested for a background
    Programs { background: Background },

    /// Copy the accumulated student records to DEST
    Export { dest: PathBuf },

    /// Back up and re-save the model artifacts in canonical form
    ResaveArtifacts {
        /// Artifact directory (defaults to the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = AdvisorConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::debug!(?config, "Resolved configuration");

    match args.command.unwrap_or(Command::Wizard) {
        Command::Wizard => run_wizard(&config),
        Command::Recommend { profile } => run_recommend(&config, &profile),
        Command::Programs { background } => {
            println!("{}", render::program_list(programs_for(background)));
            Ok(())
        }
        Command::Export { dest } => {
            let store = RecordStore::new(&config.records_path);
            let bytes = store
                .export(&dest)
                .with_context(|| format!("Failed to export records to {}", dest.display()))?;
            println!("Exported {} bytes to {}", bytes, dest.display());
            Ok(())
        }
        Command::ResaveArtifacts { dir } => {
            let dir = dir.unwrap_or_else(|| config.artifact_dir.clone());
            let outcomes = advisor::resave_artifacts(&dir)
                .with_context(|| format!("Failed to re-save artifacts in {}", dir.display()))?;
            for outcome in outcomes {
                match outcome {
                    ResaveOutcome::Resaved { path, backup } => {
                        println!("Re-saved {} (backup: {})", path.display(), backup.display())
                    }
                    ResaveOutcome::Skipped { path } => {
                        println!("Skipped {} (not found)", path.display())
                    }
                }
            }
            Ok(())
        }
    }
}

fn load_engine(config: &AdvisorConfig) -> Result<Arc<InferenceEngine>> {
    let engine = InferenceEngine::load(&config.artifact_dir).with_context(|| {
        format!(
            "Failed to load model artifacts from {}",
            config.artifact_dir.display()
        )
    })?;
    Ok(Arc::new(engine))
}

fn run_wizard(config: &AdvisorConfig) -> Result<()> {
    let engine = load_engine(config)?;
    let store = RecordStore::new(&config.records_path);
    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout(),
        engine,
        store,
        config.passing_average,
    );
    console.run().context("Questionnaire aborted")?;
    Ok(())
}

fn run_recommend(config: &AdvisorConfig, profile: &Path) -> Result<()> {
    let engine = load_engine(config)?;
    let json = if profile.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read profile from stdin")?;
        buf
    } else {
        std::fs::read_to_string(profile)
            .with_context(|| format!("Failed to read profile {}", profile.display()))?
    };

    let prediction = career_wizard::recommend_json(&engine, &json, config.passing_average)?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}
