use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax (e.g. "debug" or
/// "glint_engine=trace,wgpu=warn"). When unset, `RUST_LOG` applies, then a
/// warn-level default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are no-ops.
///
/// Call this at the top of `main`, before any engine construction, so
/// startup diagnostics reach stderr.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // wgpu backends are chatty at info level; warn keeps the
            // diagnostics stream readable while compile/link errors (logged
            // at error level) always get through.
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
    });
}
