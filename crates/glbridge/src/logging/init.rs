use std::sync::Once;

/// Default filter used when neither the config nor `RUST_LOG` provide one.
const DEFAULT_FILTER: &str = "glbridge=info,glbridge_native=info";

/// Logging configuration for the bridge.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives in `env_logger` syntax, e.g. `"glbridge=debug"`.
    ///
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,

    /// Color policy for terminal output.
    pub write_style: env_logger::WriteStyle,

    /// Capture output through the test harness instead of writing to stderr.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once per process.
///
/// Later calls are ignored, so every entry point that wants logging can call
/// this without coordinating with the host application.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.parse_filters(DEFAULT_FILTER);
            }
        }

        builder.write_style(config.write_style);
        builder.is_test(config.is_test);

        // A host that installed its own logger keeps it.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("glbridge logging initialized");
    });
}
