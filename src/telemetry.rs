//! Global tracing subscriber.

use tracing_subscriber::EnvFilter;

fn default_filter(development: bool) -> &'static str {
    if development {
        "chapel_site=debug,tower_http=debug,info"
    } else {
        "info"
    }
}

/// Human-readable output in development, JSON lines elsewhere. `RUST_LOG` overrides the level.
pub fn init(development: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(development)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if development {
        builder.try_init()
    } else {
        builder.json().with_current_span(false).try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
