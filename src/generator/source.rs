//! Where the XML database comes from: the upstream URL or a local file.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::error::FetchError;

/// The authoritative freedesktop.org shared-mime-info database.
pub const DEFAULT_DATABASE_URL: &str =
    "https://gitlab.freedesktop.org/xdg/shared-mime-info/-/raw/master/data/freedesktop.org.xml.in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_DATABASE_URL.to_string())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    /// Open the XML byte stream. HTTP bodies are streamed, not buffered whole.
    pub fn open(&self, timeout: Option<Duration>) -> Result<Box<dyn BufRead>, FetchError> {
        match self {
            Source::Url(url) => fetch(url, timeout),
            Source::File(path) => {
                let file = File::open(path).map_err(|source| FetchError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

fn fetch(url: &str, timeout: Option<Duration>) -> Result<Box<dyn BufRead>, FetchError> {
    let transport = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    // None also clears the blocking client's 30s default.
    let client = Client::builder().timeout(timeout).build().map_err(transport)?;
    let response = client.get(url).send().map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    debug!(%status, content_length = ?response.content_length(), "database response received");

    Ok(Box::new(BufReader::new(response)))
}
