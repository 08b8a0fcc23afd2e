use crate::conf::load_config;
use crate::server;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Load `<config_dir>/mediaway.hcl` and serve until terminated.
pub fn run(config_dir: PathBuf) -> Result<()> {
    let cfg = load_config(&config_dir)
        .with_context(|| format!("failed to load config from {}", config_dir.display()))?;

    server::run(config_dir, cfg)
}
