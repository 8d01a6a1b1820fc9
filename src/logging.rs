use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Logs go to stderr so they never interleave
/// with the dashboard printed on stdout. `RUST_LOG` overrides the default.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vgsales_dashboard={default_level}")));

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // `try_init` so tests or embedders that already installed one are left alone.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
