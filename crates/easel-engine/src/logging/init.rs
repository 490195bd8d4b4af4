use std::sync::Once;

use log::LevelFilter;

/// Logger setup for sketches and tools built on the engine.
///
/// `env_filter` uses the `env_logger` directive syntax, for example
/// `"easel_engine=debug,easel_sketch=info"`. When it is `None` the `RUST_LOG`
/// variable is consulted, and `default_level` applies when neither is set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
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
    /// Directive string the logger will be built from.
    fn directives(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.default_level.as_str().to_ascii_lowercase())
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls do nothing.
///
/// A logger already installed by the host is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives();
        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.write_style)
            .try_init();

        match installed {
            Ok(()) => log::debug!("logging initialized with `{directives}`"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("easel_engine=trace".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.directives(), "easel_engine=trace");
    }
}
