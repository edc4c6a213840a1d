use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
