use log::LevelFilter;

/// Install the process-wide logger.
///
/// Defaults to info level so extracted properties are visible; `--debug`
/// raises it to per-record tracing. Safe to call more than once.
pub fn init_logging(debug_mode: bool) {
    let level = if debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::builder()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}
