//! dna-lab command line.
//!
//! Works on plain text only: extract the text of a PDF prompt book first,
//! then feed it to `split` or `remix`.
//!
//! # Environment Variables
//!
//! - `DNA_LAB_SEED`: seed for reproducible runs
//! - `DNA_LAB_MAX_PROMPTS`: prompts remixed per run (default: 24)
//! - `RUST_LOG`: tracing filter (default: "info,dna_lab=debug")
//!
//! # Usage
//!
//! ```bash
//! dna-lab remix --input prompts.txt --tropes "laser grid, hover bikes" --seed 7
//! dna-lab split --input prompts.txt
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use dna_lab::report::{blueprint_cards, run_report};
use dna_lab::utilities::printer::Printer;
use dna_lab::{
    create_blueprint, derive_tropes, lab_rng, split_text_into_prompts, summarize_blueprint,
    DnaLab, LabConfig,
};

#[derive(Parser)]
#[command(name = "dna-lab")]
#[command(about = "Remix image prompts into 1980s animation DNA", long_about = None)]
#[command(version)]
struct Cli {
    /// Disable ANSI colors in text output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize trope text and print one trope per line
    Tropes {
        /// Comma, semicolon or newline separated tropes
        #[arg(short, long, default_value = "")]
        text: String,
    },

    /// Extract prompts from a plain-text catalogue
    Split {
        /// Text file holding the extracted catalogue
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Draw a blueprint and print its attributes
    Blueprint {
        /// Trope text (defaults apply when blank)
        #[arg(short, long, default_value = "")]
        tropes: String,

        /// Seed for a reproducible blueprint
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate a blueprint and remix a catalogue against it
    Remix {
        /// Text file holding the extracted catalogue (sample deck when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Trope text (overrides the configured trope text)
        #[arg(short, long)]
        tropes: Option<String>,

        /// Seed for a reproducible run (overrides config and environment)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Lab config file (.json, .yaml or .yml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dna_lab=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new(!cli.no_color);

    match cli.command {
        Commands::Tropes { text } => {
            for trope in derive_tropes(&text) {
                println!("{}", trope);
            }
        }
        Commands::Split { input, format } => {
            let text = read_text(&input)?;
            let prompts = split_text_into_prompts(&text);
            info!("{} prompts extracted from {}", prompts.len(), input.display());
            if prompts.is_empty() {
                anyhow::bail!(
                    "Could not find any prompts in {}. Make sure prompts are separated by new lines or bullet points.",
                    input.display()
                );
            }
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&prompts)?),
                OutputFormat::Text => {
                    for (index, prompt) in prompts.iter().enumerate() {
                        println!("{:>3}. {}", index + 1, prompt);
                    }
                }
            }
        }
        Commands::Blueprint {
            tropes,
            seed,
            format,
        } => {
            let tropes = derive_tropes(&tropes);
            let blueprint = create_blueprint(&tropes, &mut lab_rng(seed))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&blueprint)?),
                OutputFormat::Text => {
                    println!("{}", blueprint_cards(&summarize_blueprint(&blueprint), &printer))
                }
            }
        }
        Commands::Remix {
            input,
            tropes,
            seed,
            config,
            format,
        } => {
            let config = match config {
                Some(path) => LabConfig::load(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => LabConfig::default(),
            }
            .apply_env_overrides()?;
            debug!("Lab config: {:?}", config);

            let seed = seed.or(config.seed);
            let mut lab = DnaLab::new(config);
            if let Some(tropes) = tropes {
                lab.set_tropes_text(tropes);
            }
            if let Some(path) = input {
                let text = read_text(&path)?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                lab.load_catalogue(&name, &text)?;
            } else {
                info!("{}", lab.catalogue().source_label());
            }

            let run = lab.generate(&mut lab_rng(seed))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(run)?),
                OutputFormat::Text => print!("{}", run_report(run, &printer)),
            }
        }
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
