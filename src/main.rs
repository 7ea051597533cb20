//! AH Kit - Main Entry Point
//!
//! Opens the component gallery.

use ah_kit::app::application::run_app;
use ah_kit::constants::LOG_FILE_PREFIX;
use ah_kit::helpers::get_or_create_data_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stdout, and to a daily file in the data directory when it exists
fn init_logger() -> Option<WorkerGuard> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        Err(e) => {
            registry.init();
            tracing::warn!(error = %e, "No data directory, logging to stdout only");
            None
        }
    }
}

fn main() {
    let _guard = init_logger();

    tracing::info!("Starting AH Kit gallery...");

    run_app();
}
