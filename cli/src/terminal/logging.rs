use std::fmt::Debug;
use std::io::IsTerminal;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Events on this target are program output and go to stdout untouched.
pub const PRINT_TARGET: &str = "ccnv::print";
/// The final error of a run. Always written to stderr, whatever the filter says.
pub const FAILURE_TARGET: &str = "ccnv::failure";
/// Overrides the diagnostic filter, e.g. `CCNV_LOG=ccnv_core=trace`.
const LOG_ENV: &str = "CCNV_LOG";
const RAW_FIELD: &str = "raw_msg";

pub struct CcnvFormatter;

impl<S, N> FormatEvent<S, N> for CcnvFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let ansi = writer.has_ansi_escapes();
        let (symbol, style) = level_style(*meta.level());
        write!(writer, "{} ", paint(symbol, style, ansi))?;

        if meta.target() == FAILURE_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", paint(&raw.0, |s| s.bold(), ansi));
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

type Style = fn(ColoredString) -> ColoredString;

fn level_style(level: Level) -> (&'static str, Style) {
    match level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

/// Styles `text` only when the destination writer accepts escape codes.
fn paint(text: &str, style: Style, ansi: bool) -> String {
    if ansi {
        style(text.into()).to_string()
    } else {
        text.to_string()
    }
}

#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == RAW_FIELD {
            self.0 = format!("{value:?}");
        }
    }
}

/// Routes output to stdout and diagnostics to stderr.
///
/// Diagnostics default to warnings and errors, each `--verbose` lowers the bar
/// by one level.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let output = tracing_subscriber::fmt::layer()
        .event_format(CcnvFormatter)
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(|meta| meta.target() == PRINT_TARGET));

    let stderr_ansi = std::io::stderr().is_terminal();
    let diagnostics = tracing_subscriber::fmt::layer()
        .event_format(CcnvFormatter)
        .with_ansi(stderr_ansi)
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(|meta| {
            meta.target() != PRINT_TARGET && meta.target() != FAILURE_TARGET
        }))
        .with_filter(filter);

    let failures = tracing_subscriber::fmt::layer()
        .event_format(CcnvFormatter)
        .with_ansi(stderr_ansi)
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(|meta| meta.target() == FAILURE_TARGET));

    let _ = tracing_subscriber::registry()
        .with(output)
        .with(diagnostics)
        .with(failures)
        .try_init();
}
