use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr, stdout is reserved for the holiday file.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "rhd_core=debug,rhd_cli=debug"
    } else {
        "rhd_core=warn,rhd_cli=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
