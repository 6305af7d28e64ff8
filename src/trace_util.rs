use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Install the process-wide subscriber. `RUST_LOG` overrides the default level.
///
/// A second call is a no-op, so embedding shells may call this unconditionally.
pub fn configure_tracing() {
    let fmt_layer = fmt::layer().compact().with_target(true);
    let level_filter_layer =
        EnvFilter::builder().with_default_directive(DEFAULT_LEVEL.into()).from_env_lossy();

    let _ = tracing_subscriber::registry().with(fmt_layer).with(level_filter_layer).try_init();
}

