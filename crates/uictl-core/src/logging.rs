use tracing_subscriber::EnvFilter;

/// Default directives when neither `RUST_LOG` nor the config sets a filter.
pub const DEFAULT_FILTER: &str = "info,uictl=debug,uictl_android=debug";

pub fn init() {
    init_with_filter(None);
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. Calling this twice is harmless;
/// the second subscriber is dropped.
pub fn init_with_filter(filter: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));

    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}
