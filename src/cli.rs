//! Command-line interface implementation for doc-init.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::constants::DEFAULT_BASE_DOCS_PATH;
use crate::preview::DisplayOptions;

/// When to colour console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Command-line arguments structure for doc-init.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "doc-init: generate documentation structure from a YAML outline",
    long_about = None
)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Path to the imports template placed at the top of every new document
    #[arg(value_name = "IMPORTS_PATH")]
    pub imports_path: PathBuf,

    /// Base documentation directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BASE_DOCS_PATH)]
    pub base_docs_path: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Colour the preview and build output
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        default_value_t = ColorChoice::Auto
    )]
    pub color: ColorChoice,
}

impl Args {
    /// Resolves the colour choice against the current stdout.
    pub fn display_options(&self) -> DisplayOptions {
        let color = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        DisplayOptions::new(color)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
