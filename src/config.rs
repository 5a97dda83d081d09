//! Configuration handling for extractcsv

use std::path::PathBuf;

use crate::output::DEFAULT_SOURCE_NAME;

/// Where the export payload goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Destination {
    /// Suggested file name inside a directory
    #[default]
    Directory,
    /// Explicit output path
    File(PathBuf),
    /// Standard output
    Stdout,
}

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct Config {
    /// Service response file; `None` reads standard input
    pub input: Option<PathBuf>,
    /// Name of the original document, used for the export file name
    pub source_name: Option<String>,
    /// Directory for the export when writing under the suggested name
    pub output_dir: PathBuf,
    /// Where the payload is written
    pub destination: Destination,
    /// Suppress the summary line
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            source_name: None,
            output_dir: PathBuf::from("."),
            destination: Destination::default(),
            quiet: false,
        }
    }
}

impl Config {
    /// Create a new Config reading from a file
    pub fn new(input: PathBuf) -> Self {
        Self {
            input: Some(input),
            ..Default::default()
        }
    }

    /// Set the original document name
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Set the destination
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Enable quiet mode
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Document name the export is named after.
    ///
    /// Falls back to the input file name, then to a generic default.
    pub fn effective_source_name(&self) -> String {
        if let Some(name) = &self.source_name {
            return name.clone();
        }
        self.input
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string())
    }
}
