use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{
    EnvFilter,
    Registry,
};

/// Emit bunyan-formatted spans on stdout.
///
/// `env_filter` is the default directive; `RUST_LOG` takes precedence when
/// set. Must be called once per process.
pub fn setup_tracing(name: String, env_filter: String) {
    LogTracer::init().expect("error redirecting log records to tracing");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    set_global_default(subscriber).expect("error setting the global tracing subscriber");
}
