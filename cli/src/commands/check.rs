use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use tracing::{Instrument, info, warn};

use pingsheet_common::config::{self, Config};
use pingsheet_core::loader::{self, SheetSource};
use pingsheet_core::prober::{Prober, SystemPing};
use pingsheet_core::summary::Summary;
use pingsheet_core::{dispatcher, export};

use crate::commands::CommandLine;
use crate::mprint;
use crate::terminal::{colors, print, progress, table};

/// Runs one full check and returns the process exit code.
///
/// Errors returned from here are configuration or environment problems; the
/// caller reports them and exits with code 2.
pub async fn check(cmd: &CommandLine) -> anyhow::Result<u8> {
    let cfg = Config::new(cmd.timeout, cmd.workers);
    let source = SheetSource {
        path: cmd.workbook.clone(),
        sheet: cmd.sheet.clone(),
        name_column: cmd.name_column.clone(),
        ip_column: cmd.ip_column.clone(),
    };

    let entries = loader::load_entries(&source)?;
    if entries.is_empty() {
        warn!("No entries found in '{}'.", source.path.display());
        return Ok(Summary::default().exit_code());
    }

    info!(
        "Loaded {} entries from '{}'. Pinging...",
        entries.len(),
        source.path.display()
    );

    let start_time: Instant = Instant::now();
    let span = progress::probe_span(entries.len());
    let prober: Arc<dyn Prober> = Arc::new(SystemPing::new());
    let results = dispatcher::dispatch(
        &entries,
        prober,
        &cfg,
        Some(progress::callback(span.clone())),
    )
    .instrument(span)
    .await?;

    mprint!();
    table::print_results(&results);
    mprint!();

    if !cmd.no_export {
        let output = cmd
            .output
            .clone()
            .unwrap_or_else(|| config::default_output_path(&source.path));
        match export::export_results(&output, &results) {
            Ok(()) => info!("Results written to '{}'", output.display()),
            Err(e) => warn!("{e}"),
        }
    }

    let summary = Summary::from_results(&results);
    print_summary(&summary, start_time.elapsed());

    Ok(summary.exit_code())
}

fn print_summary(summary: &Summary, total_time: Duration) {
    let up: ColoredString = format!("{}/{} hosts up", summary.up, summary.total)
        .bold()
        .color(if summary.all_up() {
            colors::STATUS_UP
        } else {
            colors::STATUS_DOWN
        });
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64())
        .bold()
        .color(colors::ACCENT);
    let output: String = format!("Check Complete: {up} in {total_time}");

    print::fat_separator();
    print::centerln(&output);
}
