use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use alexandria_cli::{commands, config};
use alexandria_extract::ClinicalTextExtractor;
use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alexandria")]
#[command(about = "Turn everyday health narratives into structured clinical data")]
struct Cli {
    /// JSON catalog to use instead of the reference symptom set
    #[arg(long, global = true, env = "ALEXANDRIA_CATALOG")]
    catalog: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a record from each narrative
    Extract {
        /// Narratives to extract
        #[arg(required_unless_present = "jsonl")]
        texts: Vec<String>,
        /// Read one JSON value per line from stdin instead
        #[arg(long, conflicts_with = "texts")]
        jsonl: bool,
    },
    /// Run the sample narratives
    Demo,
    /// Talk to the companion on stdin
    Chat {
        /// Print the extracted record after each reply
        #[arg(long)]
        show_record: bool,
        /// Write the transcript as JSON here on exit
        #[arg(long)]
        transcript: Option<PathBuf>,
    },
    /// List the active catalog in matching order
    Catalog,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the config path and effective settings
    Show,
    /// Write a default config file if none exists
    Init,
}

fn init_tracing(filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = config::load_config()?;
    init_tracing(config.log_filter(), cli.log_json);

    // Constructed once, shared by reference for the whole run.
    let catalog = config::resolve_catalog(cli.catalog.as_deref(), &config)?;
    let extractor = ClinicalTextExtractor::new(&catalog);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Extract { texts, jsonl } => {
            if jsonl {
                let processed = commands::extract_jsonl(extractor, io::stdin().lock(), &mut out)?;
                tracing::info!(processed, "jsonl extraction complete");
            } else {
                commands::extract_texts(extractor, &texts, &mut out)?;
            }
        }
        Commands::Demo => commands::demo(extractor, &mut out)?,
        Commands::Chat {
            show_record,
            transcript,
        } => {
            let result = commands::chat(extractor, io::stdin().lock(), &mut out, show_record)?;
            if let Some(path) = transcript {
                std::fs::write(&path, serde_json::to_string_pretty(&result)?)?;
                tracing::info!(path = %path.display(), turns = result.turns.len(), "transcript written");
            }
        }
        Commands::Catalog => commands::print_catalog(&catalog, &mut out)?,
        Commands::Config { action } => {
            let path = config::config_path()?;
            match action {
                ConfigAction::Show => {
                    writeln!(out, "path: {}", path.display())?;
                    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
                }
                ConfigAction::Init => {
                    if path.exists() {
                        writeln!(out, "config already exists at {}", path.display())?;
                    } else {
                        config::save_config_to(&config::AlexandriaConfig::default(), &path)?;
                        writeln!(out, "wrote {}", path.display())?;
                    }
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
