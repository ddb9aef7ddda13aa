use std::path::PathBuf;

use thiserror::Error;

/// Problems reading the input workbook. All of them abort the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not read workbook '{}': {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{name}' not found, available sheets: {}", .available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error(
        "could not find IP address column in the header row (headers found: {}), specify it with --ip-column",
        .headers.join(", ")
    )]
    NoAddressColumn { headers: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ProbeError {
    /// The ping utility itself is missing. Every other host would fail the
    /// same way, so this one is fatal.
    #[error("'{program}' command not found on this system")]
    PingUnavailable { program: String },

    #[error("probing {address} failed: {source}")]
    Io {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProbeError::PingUnavailable { .. })
    }
}

#[derive(Debug, Error)]
#[error("could not write results workbook '{}': {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: rust_xlsxwriter::XlsxError,
}
