//! Console logging for the demo binary.

/// Installs a `fmt` subscriber at `INFO` with thread names, so loader and game
/// lines can be told apart. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_names(true)
        .try_init();
}
