use colored::*;
use quadra_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Prefixes every event with a colored symbol for its level.
///
/// Only three levels are emitted: retry diagnostics (warn), lost output (error)
/// and `--verbose` detail (debug and below).
pub struct QuadraFormatter;

fn level_symbol(level: Level) -> ColoredString {
    if level == Level::ERROR {
        "[-]".red().bold()
    } else if level == Level::WARN {
        "[*]".yellow().bold()
    } else {
        "[?]".blue()
    }
}

impl<S, N> FormatEvent<S, N> for QuadraFormatter
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
        write!(writer, "{} ", level_symbol(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Default directive when `RUST_LOG` is unset.
fn default_directive(cfg: &Config) -> &'static str {
    match (cfg.quiet, cfg.verbose) {
        (0, true) => "debug",
        (0, false) => "warn",
        (1, _) => "error",
        _ => "off",
    }
}

/// Installs the global subscriber. Diagnostics go to stderr; stdout carries only the report.
pub fn init_logging(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cfg)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(QuadraFormatter)
        .try_init();
}
