//! Command-line argument definitions for the archsynth CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Each artifact has its own subcommand; configuration file
//! selection and logging verbosity apply to all of them.

use clap::{Parser, Subcommand};

/// Command-line arguments for the archsynth artifact generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// The artifact to produce.
///
/// `INPUT` arguments name a file when one exists at that path; otherwise the
/// argument itself is the input text.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the OpenAPI contract of a description or a bare resource name
    Openapi {
        #[arg(help = "System description or resource name (file path or text)")]
        input: String,

        /// Write the contract here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render the five Mermaid diagrams of a description
    Diagrams {
        #[arg(help = "System description (file path or text)")]
        input: String,

        /// Write the Markdown document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Also write one unfenced `.mmd` file per diagram into this directory
        #[arg(long)]
        split_dir: Option<String>,
    },

    /// Report relationship ids that do not resolve
    Check {
        #[arg(help = "System description (file path or text)")]
        input: String,
    },

    /// Check the section structure of an architecture document
    ValidateDoc {
        #[arg(help = "Path to the Markdown document")]
        file: String,
    },
}
