use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `env_logger` backend. `RUST_LOG` wins over `level` when set.
/// Only the first call has any effect.
pub fn init_logging(level: LevelFilter) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.filter_level(level),
        };

        // Tests may have installed a logger already
        if builder.try_init().is_ok() {
            log::debug!("logging at {} unless RUST_LOG overrides", level);
        }
    });
}
