use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mimedesc::generator::{GeneratorConfig, Source, DEFAULT_DATABASE_URL, DEFAULT_OUTPUT_PATH};

/// Regenerate the MIME description table from the shared-mime-info database.
#[derive(Parser, Debug)]
#[command(version)]
pub(crate) struct Cli {
    /// URL of the shared-mime-info XML database
    #[arg(long, default_value = DEFAULT_DATABASE_URL, conflicts_with = "input")]
    pub url: String,
    /// Read the database from a local file instead of fetching it
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Where to write the generated table
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
    /// HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Log per-element detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> GeneratorConfig {
        let source = match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        };
        GeneratorConfig {
            source,
            output: self.output.clone(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
