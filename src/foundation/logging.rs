use tracing::level_filters::LevelFilter;

/// Install the stderr `tracing` subscriber used by the command-line tools.
///
/// `verbose` raises the level from `WARN` to `DEBUG`. Calling this twice is harmless; the second
/// install attempt is ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
