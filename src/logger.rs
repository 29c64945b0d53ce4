//! Logging setup for doc-init.

/// Initialises the global logger. Warnings are always shown, `verbose` adds debug records.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
