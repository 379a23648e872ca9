//! Process-wide `tracing` subscriber.
//!
//! Console output is always on. `LOG_TO_FILE=true|1` adds a daily rotated
//! `inventory-api.log` under `LOG_DIR` (default `./logs`). Timestamps are
//! rendered in `LOG_TIMEZONE` (an IANA name, default UTC). `RUST_LOG`
//! overrides the default filter.

use std::path::PathBuf;

use chrono::Utc;
use chrono_tz::Tz;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";
const LOG_FILE_NAME: &str = "inventory-api.log";

#[derive(Debug, Clone, Copy)]
struct ZonedTime(Tz);

impl FormatTime for ZonedTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Utc::now().with_timezone(&self.0).format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub timezone: Tz,
    /// Directory for the rotated log file, `None` keeps logs on the console.
    pub file_dir: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown time zones fall back to UTC; logging is not worth failing
    /// startup over.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let timezone = get("LOG_TIMEZONE")
            .and_then(|name| name.trim().parse::<Tz>().ok())
            .unwrap_or(Tz::UTC);
        let to_file = matches!(get("LOG_TO_FILE").as_deref(), Some("true") | Some("1"));
        let file_dir = to_file.then(|| {
            PathBuf::from(get("LOG_DIR").unwrap_or_else(|| "./logs".to_string()))
        });
        Self { timezone, file_dir }
    }
}

pub fn init_logging() {
    init_with(&LogSettings::from_env());
}

pub fn init_with(settings: &LogSettings) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let timer = ZonedTime(settings.timezone);

    let console = fmt::layer()
        .with_timer(timer)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let file = settings.file_dir.as_ref().map(|dir| {
        fmt::layer()
            .with_timer(timer)
            .with_writer(RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME))
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();
}
