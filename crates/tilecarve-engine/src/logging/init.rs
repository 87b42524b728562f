use std::sync::Once;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tilecarve_engine=debug"). When absent, `RUST_LOG` is consulted before
/// falling back to `default_level`.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            // Clamp warnings must stay visible without extra flags.
            default_level: LevelFilter::Warn,
            write_style: WriteStyle::Auto,
        }
    }
}

/// Module whose warnings (radius clamping) are always shown.
const WARN_FLOOR_TARGET: &str = "tilecarve_engine::tileset";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
///
/// Whatever the filter says, warnings from the tileset assembler stay enabled.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| config.default_level.to_string());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        if !tileset_warnings_enabled(&filter) {
            builder.filter_module(WARN_FLOOR_TARGET, LevelFilter::Warn);
        }

        builder.write_style(config.write_style);
        builder.format_timestamp(None);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Whether `filter` already lets tileset warnings through.
fn tileset_warnings_enabled(filter: &str) -> bool {
    let filter = env_filter::Builder::new().parse(filter).build();
    let metadata = log::Metadata::builder()
        .level(log::Level::Warn)
        .target(WARN_FLOOR_TARGET)
        .build();
    filter.enabled(&metadata)
}
