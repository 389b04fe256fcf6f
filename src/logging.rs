use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber for the overlay's console output.
///
/// `debug` selects the `debug` level and lets `RUST_LOG` pick another filter;
/// otherwise only `info` and above are printed. Calling it again is a no-op.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
