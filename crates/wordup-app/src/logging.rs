use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout belongs to the view
pub fn init_logging(format: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}
