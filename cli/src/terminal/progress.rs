//! Progress bar for the probing phase, driven through `tracing-indicatif`.

use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use tracing_indicatif::style::ProgressStyle;

use pingsheet_core::dispatcher::ProgressCallback;

const TICKS: &[&str] = &[
    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
];

const TEMPLATE: &str = "{spinner:.blue} {msg} {pos}/{len} {wide_bar:.green/white}";

/// Creates the span that owns the bar. The bar shows up once the span is entered.
pub fn probe_span(total: usize) -> Span {
    let span = info_span!("probing", indicatif.pb_show = true);

    if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
        span.pb_set_style(&style.tick_strings(TICKS));
    }
    span.pb_set_length(total as u64);
    span.pb_set_message("Pinging hosts");
    span
}

/// Feeds dispatcher completions into the bar owned by `span`.
pub fn callback(span: Span) -> ProgressCallback {
    Box::new(move |done: usize| span.pb_set_position(done as u64))
}
