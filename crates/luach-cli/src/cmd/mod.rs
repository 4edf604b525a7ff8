pub mod config;
pub mod gematria;
pub mod months;
pub mod now;
pub mod watch;

use anyhow::Context;
use luach_core::config::Config;
use std::path::Path;

/// Load the config and refuse to run with error-level problems.
pub fn load_valid_config(path: &Path) -> anyhow::Result<Config> {
    let config = Config::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    config.ensure_valid().context("run 'luach config validate' for details")?;
    Ok(config)
}
