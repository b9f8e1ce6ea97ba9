use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber for the CLI.
///
/// `RUST_LOG` wins over everything; otherwise `directive` (usually
/// `logging.level` from the config file) is used, falling back to the
/// crate default.
pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    let fallback = match (directive, verbose) {
        (Some(directive), _) => directive.to_string(),
        (None, true) => "form_enhancer=debug,info".to_string(),
        (None, false) => "form_enhancer=info".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for piping `simulate` output into log tooling.
pub fn init_json_logger(directive: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive.unwrap_or("form_enhancer=info")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}
