//! Folio CLI
//!
//! Thin wrapper around folio-core for working on the portfolio offline.
//!
//! ## Usage
//!
//! ```bash
//! # Write the CV text file into the current directory
//! folio cv
//!
//! # Write it somewhere else, or print it
//! folio cv --out ~/Desktop/cv.txt
//! folio cv --stdout
//!
//! # Show the effective site configuration
//! folio config --config site.json
//!
//! # Show every listener and reveal group the page installs
//! folio plan
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::reveal::{portfolio_groups, Stagger};
use folio_core::{CvDocument, ListenerPlan, Profile, SiteConfig};

/// Folio - portfolio site companion
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio site companion")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site configuration file (JSON). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the CV text file
    Cv {
        /// Output path (default: CV_<Name>.txt in the current directory)
        #[arg(short, long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print the CV instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Profile JSON to render instead of the bundled one
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON
    Config,

    /// Print listener bindings and reveal groups
    Plan,
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn load_profile(path: Option<&PathBuf>) -> Result<Profile> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?;
            Profile::from_json_str(&json)
                .with_context(|| format!("Failed to parse profile {}", path.display()))
        }
        None => Profile::builtin().context("Bundled profile is invalid"),
    }
}

fn describe_stagger(stagger: Stagger) -> String {
    match stagger {
        Stagger::None => "none".to_string(),
        Stagger::Children(ms) => format!("children every {}ms", ms),
        Stagger::Siblings(ms) => format!("siblings every {}ms", ms),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio_core::logging::init(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Cv {
            out,
            stdout,
            profile,
        } => {
            let profile = load_profile(profile.as_ref())?;
            let document = CvDocument::from_profile(&profile);

            if stdout {
                print!("{}", document.content);
                return Ok(());
            }

            let path = out.unwrap_or_else(|| PathBuf::from(&document.file_name));
            std::fs::write(&path, &document.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = document.content.len(), "wrote CV");
            println!("CV written to {}", path.display());
        }

        Commands::Config => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }

        Commands::Plan => {
            let listeners = ListenerPlan::portfolio(config.trail.enabled);
            println!("Listeners ({}):", listeners.len());
            for binding in listeners.iter() {
                println!("  {}", binding);
            }

            println!();
            println!("Reveal groups:");
            for group in portfolio_groups(&config.reveal) {
                println!("  {}", group.name);
                println!("    Selector: {}", group.selector);
                if let Some(children) = group.child_selector {
                    println!("    Children: {}", children);
                }
                println!(
                    "    Threshold: {}  Margin: {}  Stagger: {}  Effect: {:?}",
                    group.options.threshold,
                    group.options.root_margin,
                    describe_stagger(group.options.stagger),
                    group.options.effect
                );
            }
        }
    }

    Ok(())
}
