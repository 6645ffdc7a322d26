use hrr::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Skipped rows and data-integrity faults are logged at this level; raise it with `RUST_LOG`
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(DEFAULT_LOG_LEVEL)
        .env()
        .init()?;

    Ok(())
}
