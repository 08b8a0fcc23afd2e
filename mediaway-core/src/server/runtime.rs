use crate::conf::{ConfigError, RuntimeConfig, load_config};
use crate::library::{Collection, Library};
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

/// Everything a request needs, swapped atomically on reload.
#[derive(Debug)]
pub struct RuntimeState {
    pub prefix: String,
    pub library: Library,
}

pub fn build_runtime_state(cfg: &RuntimeConfig) -> RuntimeState {
    RuntimeState {
        prefix: cfg.server.prefix.clone(),
        library: cfg.library.clone(),
    }
}

pub async fn reload_runtime_state(
    config_dir: &Path,
    state: &ArcSwap<RuntimeState>,
) -> Result<(), ConfigError> {
    let cfg = load_config(config_dir)?;
    let new_state = build_runtime_state(&cfg);

    let old = state.load();
    tracing::info!(
        old_movies = old.library.count(Collection::Movies),
        old_tvshows = old.library.count(Collection::TvShows),
        new_movies = new_state.library.count(Collection::Movies),
        new_tvshows = new_state.library.count(Collection::TvShows),
        "runtime state reloaded"
    );

    if old.prefix != new_state.prefix {
        tracing::warn!(
            old_prefix = %old.prefix,
            new_prefix = %new_state.prefix,
            "media prefix changed; previously published stream URLs stop resolving"
        );
    }

    state.store(Arc::new(new_state));

    Ok(())
}
