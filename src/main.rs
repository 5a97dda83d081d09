//! extractcsv - Export table-extraction results as CSV

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use extractcsv::config::{Config, Destination};
use extractcsv::parser::parse_response;
use extractcsv::{extract_csv, CsvExport, ExtractError};

/// Turn the JSON result of a table-extraction service into a spreadsheet-ready CSV
#[derive(Parser, Debug)]
#[command(name = "extractcsv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service response file (JSON); omit or pass `-` to read stdin
    input: Option<PathBuf>,

    /// Name of the original document, used to name the export (e.g. report.pdf)
    #[arg(short, long)]
    source_name: Option<String>,

    /// Directory the export is written into under its suggested name
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// Write the export to this path instead
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the CSV payload to stdout
    #[arg(long)]
    stdout: bool,

    /// Do not print the export summary
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let destination = match (self.output, self.stdout) {
            (_, true) => Destination::Stdout,
            (Some(path), false) => Destination::File(path),
            (None, false) => Destination::Directory,
        };
        let input = self.input.filter(|path| path.as_os_str() != "-");

        let mut config = Config {
            input,
            ..Default::default()
        }
        .with_output_dir(self.output_dir)
        .with_destination(destination)
        .with_quiet(self.quiet);
        if let Some(name) = self.source_name {
            config = config.with_source_name(name);
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ExtractError>() {
            Some(err) if err.is_no_table() => {
                tracing::debug!("no usable table: {err}");
                let _ = print_notice(err.user_message());
                ExitCode::from(1) // No table found
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn run() -> Result<()> {
    let config = Cli::parse().into_config();

    let text = read_input(&config)?;
    let value = parse_response(&text).context("Failed to read service response")?;

    let source_name = config.effective_source_name();
    let export = extract_csv(&value, &source_name)?;

    let target = match &config.destination {
        Destination::Stdout => {
            export
                .write_to(&mut io::stdout().lock())
                .context("Failed to write to stdout")?;
            "stdout".to_string()
        }
        Destination::File(path) => {
            export
                .write_to_path(path)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            path.display().to_string()
        }
        Destination::Directory => {
            let path = export.write_to_dir(&config.output_dir).with_context(|| {
                format!(
                    "Failed to write export into: {}",
                    config.output_dir.display()
                )
            })?;
            path.display().to_string()
        }
    };

    if !config.quiet {
        print_summary(&export, &target)?;
    }
    Ok(())
}

fn read_input(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_summary(export: &CsvExport, target: &str) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stderr, "Exported")?;
    stderr.reset()?;
    writeln!(
        stderr,
        " {} rows × {} columns → {}",
        export.row_count, export.column_count, target
    )
}

fn print_notice(message: &str) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(stderr, "{}", message)?;
    stderr.reset()
}
