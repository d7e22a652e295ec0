use std::fs::File;
use std::sync::Mutex;

use mdcarve_core::config::ResolvedConfig;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

// Keeps the non-blocking file writer alive for the whole run.
static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);
    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.logging.file else {
        registry.init();
        return;
    };

    let file_level = cfg
        .logging
        .file_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| parse_level(&cfg.logging.level))
        .unwrap_or(LevelFilter::DEBUG);
    let file_filter =
        EnvFilter::builder().with_default_directive(file_level.into()).from_env_lossy();

    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("failed to create log file {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter);

    registry.with(file_layer).init();
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
