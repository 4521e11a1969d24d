use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// The only diagnostic the codec emits is the `debug` record from
/// [`PackedColor::pack`](crate::PackedColor::pack) when it clamps an
/// out-of-range or NaN channel; enable it with `hexpack=debug`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter; takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Warnings only, for command-line tools whose stdout is the result.
    pub fn quiet() -> Self {
        Self {
            default_level: LevelFilter::Warn,
            ..Self::default()
        }
    }
}

/// Filter string to hand to `env_logger`, or `None` to fall back to the
/// config's default level.
fn select_filter(config_filter: Option<String>, rust_log: Option<String>) -> Option<String> {
    let non_blank = |f: &String| !f.trim().is_empty();
    config_filter.filter(non_blank).or(rust_log.filter(non_blank))
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored, including their config. If the host
/// already installed a logger it is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match select_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            log::warn!("logger already installed, keeping the existing one");
            return;
        }

        log::debug!("hexpack logging initialized");
    });
}
