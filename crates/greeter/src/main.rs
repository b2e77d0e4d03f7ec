// `greet` entry point.
//
// Startup sequence:
// 1. Load config (optional config/greeter.toml)
// 2. Initialize tracing (log to stderr, stdout is reserved for the greeting)
// 3. Print the greeting

use greeter::config;

use anyhow::Context;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("failed to load configuration")?;

    init_tracing(&config.logging.filter)?;
    debug!(filter = %config.logging.filter, "greet starting");

    println!("{}", greeter::get_greeting());

    Ok(())
}

/// Initialize tracing to log to stderr. `RUST_LOG` wins over the config file.
fn init_tracing(fallback_filter: &str) -> anyhow::Result<()> {
    use std::io::IsTerminal;
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
