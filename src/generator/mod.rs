//! # Table generation
//!
//! Turns the shared-mime-info XML database into `src/data.rs`:
//!
//! 1. `source` - open the XML stream (HTTP or local file)
//! 2. `extract` - pull `<mime-type>` descriptions out of it
//! 3. `render` - escape and render a `phf_map!` and check the result lexes
//! 4. `persist` - atomically replace the output file
//!
//! A run is all-or-nothing: the output file is only touched once every
//! earlier stage has succeeded.

pub mod error;
pub mod extract;
pub mod persist;
pub mod render;
pub mod source;

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tracing::{info, warn};

pub use error::{DecodeError, FetchError, GenerateError, RenderError, WriteError};
pub use extract::{extract_descriptions, DescriptionTable, MimeEntries, MimeEntry};
pub use persist::write_table;
pub use render::{check_source, escape_literal, render_table};
pub use source::{Source, DEFAULT_DATABASE_URL};

/// Default location of the generated table, relative to the crate root.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data.rs";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: Source,
    pub output: PathBuf,
    /// Upper bound on the HTTP request; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: Source::default(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            timeout: None,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub entries: usize,
    pub output: PathBuf,
}

/// Fetch, extract, render and write the table.
pub fn run(config: &GeneratorConfig) -> Result<GenerateSummary, GenerateError> {
    info!(source = %config.source, "fetching MIME database");
    let input = config.source.open(config.timeout)?;

    info!("parsing XML data");
    let table = extract_descriptions(input)?;
    info!(entries = table.len(), "parsed MIME descriptions");
    if table.is_empty() {
        warn!("no MIME descriptions found; the generated table will be empty");
    }

    info!(output = %config.output.display(), "generating table source");
    let rendered = render_table(&table, SystemTime::now())?;
    write_table(&config.output, &rendered)?;

    Ok(GenerateSummary {
        entries: table.len(),
        output: config.output.clone(),
    })
}
