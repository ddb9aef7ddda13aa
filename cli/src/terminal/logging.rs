
use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Events on this target are console output, written without a level marker.
pub const PRINT_TARGET: &str = "pingsheet::print";

pub struct PingsheetFormatter;

impl<S, N> FormatEvent<S, N> for PingsheetFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// Verbosity follows `RUST_LOG` (default `info`). Console output on
/// [`PRINT_TARGET`] stays enabled whatever the filter says, and every line is
/// routed through the progress bar layer so bars are not torn by log lines.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();

    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    if let Ok(directive) = format!("{PRINT_TARGET}=info").parse() {
        filter = filter.add_directive(directive);
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(PingsheetFormatter)
        .with_writer(indicatif_layer.get_stdout_writer());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer)
        .try_init();
}
