//! Browser console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

#[cfg(debug_assertions)]
const MAX_LEVEL: LevelFilter = LevelFilter::DEBUG;
#[cfg(not(debug_assertions))]
const MAX_LEVEL: LevelFilter = LevelFilter::INFO;

/// Install a fmt subscriber that writes to the browser console.
///
/// Timestamps are omitted since `std::time` is unavailable in the browser.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(MAX_LEVEL);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::warn!("Tracing subscriber already installed");
    }
}
