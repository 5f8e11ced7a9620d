//! Diagnostics output for scans.
//!
//! The `wordgrid-*` crates only emit through the `log` facade: one `debug!`
//! summary per stage (symbols kept, lanes found, collisions, extraction mode)
//! and one `info!` line per scan. Binaries pick a backend here:
//!
//! - [`init_with_level`] installs a stderr logger that prefixes each line with
//!   the time since installation and the emitting stage, e.g.
//!   `[  0.004s DEBUG layout::filter] symbol filter: 5 of 7 symbols ...`.
//! - `init_tracing` / `init_tracing_with` (feature `tracing`) install a
//!   `tracing` fmt subscriber that also reports per-stage span timings.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct ScanLogger {
    level: LevelFilter,
    started: Instant,
}

/// Module path of a log record without the `wordgrid_` crate prefix.
fn stage_name(target: &str) -> &str {
    target.strip_prefix("wordgrid_").unwrap_or(target)
}

impl Log for ScanLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{elapsed:7.3}s {:>5} {}] {}",
            record.level(),
            stage_name(record.target()),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<ScanLogger> = OnceLock::new();

/// Route scan diagnostics at or above `level` to stderr.
///
/// Only the first call installs the logger; later calls keep the original
/// level and return `Ok(())`.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| ScanLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// [`init_tracing_with`] using `info` when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    init_tracing_with(json, "info");
}

/// Install a `tracing` fmt subscriber with span close events.
///
/// `RUST_LOG` takes precedence; otherwise `default_filter` (for example a
/// `--log-level` value such as `debug`) is used, falling back to `info` if it
/// does not parse.
#[cfg(feature = "tracing")]
pub fn init_tracing_with(json: bool, default_filter: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = scan_filter(env.as_deref(), default_filter);
    if json {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .json()
            .flatten_event(true)
            .finish()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(feature = "tracing")]
fn scan_filter(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|e| EnvFilter::try_new(e).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
