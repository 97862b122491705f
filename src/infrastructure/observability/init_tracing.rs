use std::net::SocketAddr;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber: pretty lines locally, JSON when
/// `logging.enable_json` is set. `RUST_LOG` overrides the configured level.
pub fn init_tracing(config: &TracingConfig, addr: SocketAddr) {
    let directives = config.default_directives();
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }

    tracing::info!(
        service = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        environment = %config.environment,
        json_format = config.json_format,
        directives = %directives,
        "Tracing initialized"
    );
}
