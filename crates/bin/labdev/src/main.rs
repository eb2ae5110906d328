//! # labdev — measurement device workbench
//!
//! Composition root that wires the console adapter to the session.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging on stderr so it never interleaves with the menu
//! - Seed the device container from configuration
//! - Run the interactive session on stdin/stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use labdev_adapter_stdio::StdioConsole;
use labdev_app::session::Session;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter '{}'", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let container = config.seed_container();
    tracing::info!(seeded = container.len(), "starting session");

    let mut session = Session::new(
        StdioConsole::stdio(),
        container,
        config.session_options(),
    );
    session.run().context("console session failed")?;

    tracing::info!(devices = session.container().len(), "session ended");
    Ok(())
}
