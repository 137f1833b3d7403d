//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use nbkit::output::OutputMode;

/// nbkit - Generate notebooks, publish them to Colab, convert Markdown
#[derive(Parser, Debug)]
#[command(
    name = "nbkit",
    version,
    about = "Generate notebooks, publish them to Colab, convert Markdown",
    long_about = "Turn an instruction into a Python notebook, run it and publish it to GitHub \
                  for Colab, or convert Markdown documents to DOCX.\n\n\
                  Settings are read from ./nbkit.toml or ~/.nbkit/config.toml."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of the default lookup
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate code for an instruction, save it as a notebook, run it and publish it
    Run {
        /// What the script should do (e.g. "prints the first 10 primes")
        #[arg(required = true, trailing_var_arg = true)]
        instruction: Vec<String>,
    },

    /// Publish an existing file and print its Colab link
    Publish {
        /// File to publish (looked up in the staging directory if not found)
        file: PathBuf,
    },

    /// Convert a Markdown file to DOCX
    Convert {
        /// Markdown file (must end in .md)
        file: PathBuf,
    },

    /// Write a starter nbkit.toml in the current directory
    Init {
        /// Overwrite an existing nbkit.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Run { instruction }) => {
            commands::run(&instruction.join(" "), config, output_mode)
        },
        Some(Command::Publish { file }) => commands::publish(&file, config, output_mode),
        Some(Command::Convert { file }) => commands::convert(&file, config, output_mode),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Config) => commands::show_config(config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("nbkit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("nbkit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'nbkit --help' for usage");
                println!("Run 'nbkit init' to get started");
            }
            Ok(())
        },
    }
}
