use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// `RUST_LOG` directives take precedence over `default_level`. Colors are
/// only emitted when stdout is a terminal, so container logs stay plain.
pub fn init_tracing(default_level: LevelFilter) -> crate::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init()
}
