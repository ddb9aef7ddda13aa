pub mod check;

use std::path::PathBuf;

use clap::Parser;
use pingsheet_common::config::{DEFAULT_TIMEOUT_MS, DEFAULT_WORKBOOK, DEFAULT_WORKERS};

#[derive(Parser, Debug)]
#[command(name = "pingsheet", version)]
#[command(about = "Ping every host listed in a spreadsheet (.xlsx).")]
pub struct CommandLine {
    /// Path to the workbook listing the hosts
    #[arg(default_value = DEFAULT_WORKBOOK)]
    pub workbook: PathBuf,

    /// Worksheet to read (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Header of the name column (auto-detected if omitted)
    #[arg(long = "name-column", value_name = "HEADER")]
    pub name_column: Option<String>,

    /// Header of the IP address column (auto-detected if omitted)
    #[arg(long = "ip-column", value_name = "HEADER")]
    pub ip_column: Option<String>,

    /// Ping timeout per host in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS, allow_negative_numbers = true)]
    pub timeout: i64,

    /// Concurrent workers, 1 probes sequentially
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WORKERS, allow_negative_numbers = true)]
    pub workers: i64,

    /// Results workbook (default: <input>_results.xlsx)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Skip writing the results workbook
    #[arg(long)]
    pub no_export: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
