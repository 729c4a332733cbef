use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Set up tracing for the process: console output always, plus a
/// daily-rolling file in `log_dir` when one is given.
///
/// `RUST_LOG` overrides the built-in filter; `verbose` only changes the
/// fallback level.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let fallback = if verbose {
        "padkit=debug,warn"
    } else {
        "padkit=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let file_layer = log_dir.map(|dir| {
        let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, "padkit.log"));
        // The writer stops flushing once the guard drops; init_logging runs
        // once for the process lifetime, so keep it alive for good.
        std::mem::forget(guard);
        fmt::layer().with_writer(writer).with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .with(file_layer)
        .init();

    Ok(())
}
