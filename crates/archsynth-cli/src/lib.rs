//! CLI logic for the archsynth artifact generator.
//!
//! This module contains the core CLI logic: input resolution, subcommand
//! dispatch and output writing.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info, warn};

use archsynth::{ArchsynthError, ArtifactBuilder};

use error_adapter::{DiagnosticAdapter, render_report};

/// Run the archsynth CLI application
///
/// Loads the configuration, then produces the artifact the subcommand asks
/// for. Results go to the output file when one is given and to stdout
/// otherwise.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArchsynthError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed descriptions
/// - Blank resource names
/// - Architecture documents missing required sections
pub fn run(args: &Args) -> Result<(), ArchsynthError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = ArtifactBuilder::new(app_config);

    match &args.command {
        Command::Openapi { input, output } => {
            info!(input = input.as_str(), output:? = output; "Generating OpenAPI contract");
            let source = read_input(input)?;
            let api = builder.api_from_source(&source)?;
            let json = builder.contract_json(&api)?;
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
        Command::Diagrams {
            input,
            output,
            split_dir,
        } => {
            info!(
                input = input.as_str(),
                output:? = output,
                split_dir:? = split_dir;
                "Generating diagrams"
            );
            let source = read_input(input)?;
            let model = builder.parse(&source)?;
            let diagrams = builder.render_diagrams(&model);
            write_output(output.as_deref(), &diagrams.to_markdown())?;

            if let Some(dir) = split_dir {
                let paths = diagrams.write_split(Path::new(dir))?;
                info!(dir = dir.as_str(), files = paths.len(); "Diagram sources written");
            }
        }
        Command::Check { input } => {
            info!(input = input.as_str(); "Checking references");
            let source = read_input(input)?;
            let (_, warnings) = builder.parse_and_check(&source)?;

            let mut report = String::new();
            for warning in &warnings {
                report.push_str(&render_report(&DiagnosticAdapter::new(warning, &source)));
            }
            if warnings.is_empty() {
                report.push_str("All references resolve\n");
            } else {
                report.push_str(&format!("{} reference warning(s)\n", warnings.len()));
            }
            write_output(None, &report)?;
        }
        Command::ValidateDoc { file } => {
            info!(file = file.as_str(); "Checking architecture document");
            let text = fs::read_to_string(file)?;
            let report = builder.check_document(&text);

            let mut summary = String::new();
            if report.passed() {
                summary.push_str("Architecture document check PASSED\n");
            } else {
                summary.push_str("Architecture document check FAILED\n");
                for issue in report.issues() {
                    summary.push_str(&format!("  - {issue}\n"));
                }
            }
            if !report.warnings().is_empty() {
                summary.push_str("Warnings:\n");
                for warning in report.warnings() {
                    summary.push_str(&format!("  - {warning}\n"));
                }
            }
            write_output(None, &summary)?;

            if !report.passed() {
                return Err(ArchsynthError::Input(format!(
                    "{file} is missing required sections"
                )));
            }
        }
    }

    Ok(())
}

/// Resolve an `INPUT` argument: a file's content when the path names a
/// file, otherwise the argument itself.
fn read_input(input: &str) -> Result<String, ArchsynthError> {
    let path = Path::new(input);
    if path.is_file() {
        debug!(path = input; "Reading input file");
        return Ok(fs::read_to_string(path)?);
    }
    if input.ends_with(".json") {
        warn!(input = input; "No such file, treating the argument as input text");
    }
    Ok(input.to_string())
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), ArchsynthError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            info!(output_file = path, bytes = content.len(); "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
