use jisho_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, before anything logs.
pub fn init(config: &LogConfig) {
    let (filter, invalid) = match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.json {
        builder.json().init();
    } else if config.concise {
        builder.compact().with_target(false).init();
    } else {
        builder.init();
    }

    if let Some(e) = invalid {
        tracing::warn!(level = %config.level, error = %e, "invalid log level, falling back to info");
    }
}
