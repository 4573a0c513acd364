//! Single page portfolio.
mod app;
mod commands;
mod components;
mod constants;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeConsoleWriter};

#[cfg(debug_assertions)]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

#[cfg(not(debug_assertions))]
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

fn main() {
    init_logging();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mounting site");
    yew::Renderer::<app::App>::new().render();
}

/// Sends events to the browser console and spans to the performance timeline.
fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // consoles render escape codes inconsistently
        .with_timer(UtcTime::rfc_3339()) // no system clock on wasm
        .with_writer(MakeConsoleWriter)
        .with_filter(MAX_LOG_LEVEL);

    let perf_layer = performance_layer()
        .with_details_from_fields(Pretty::default())
        .with_filter(MAX_LOG_LEVEL);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
