use log::LevelFilter;

/// Initialize logging for programs that validate clues with this crate.
///
/// Uses `Debug` level if `debug_enabled` is true, otherwise `Info`. An
/// explicitly set `RUST_LOG` overrides the level. Every constructor logs its
/// outcome at `debug`, and indicator substitution steps are logged at `trace`.
///
/// Returns `false` if a logger was already installed, in which case the
/// existing one is kept.
pub fn init_logger(debug_enabled: bool) -> bool {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        return false;
    }
    log::info!("Logger initialized at {level:?} level");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        // the first call may lose to another test that logged first
        let _ = init_logger(true);
        assert!(!init_logger(false));
    }
}
