use crate::conf::RuntimeConfig;
use crate::library::Collection;
use crate::server::gateway::MediaGateway;
use crate::server::pid;
use crate::server::reload::ReloadHandle;
use crate::server::runtime::{RuntimeState, build_runtime_state, reload_runtime_state};
use anyhow::{Context, Error, Result};
use arc_swap::ArcSwap;
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;
use std::path::PathBuf;
use std::sync::Arc;

/// Run the media server until the process is terminated.
pub fn run(config_dir: PathBuf, config: RuntimeConfig) -> Result<()> {
    use tokio::runtime::Builder;

    // Attempt to write pid file (best-effort)
    if let Some(pid_file) = &config.server.pid_file {
        if let Err(e) = pid::write_pid(pid_file) {
            tracing::warn!(error = %e, pid_file = %pid_file.display(), "failed to write pid file; continuing");
        } else {
            tracing::info!(pid_file = %pid_file.display(), "pid file written");
        }
    }

    let initial_state = build_runtime_state(&config);
    tracing::info!(
        listen = %config.server.listen,
        prefix = %initial_state.prefix,
        movies = initial_state.library.count(Collection::Movies),
        tvshows = initial_state.library.count(Collection::TvShows),
        "starting media server"
    );
    let state = Arc::new(ArcSwap::from_pointee(initial_state));

    // Control-plane runtime (signals + reload only)
    let control_rt = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to build control-plane Tokio runtime")?;

    let reload = ReloadHandle::new();

    control_rt.spawn({
        let reload = reload.clone();
        async move {
            if let Err(e) = reload.install_signal_handler().await {
                tracing::error!(error = %e, "SIGHUP handler not installed; reload disabled");
            }
        }
    });

    control_rt.spawn({
        let mut reload_rx = reload.subscribe();
        let state = state.clone();
        let config_dir = config_dir.clone();

        async move {
            tracing::info!("reload loop started");

            while reload_rx.changed().await.is_ok() {
                tracing::info!("reload requested");

                match reload_runtime_state(&config_dir, &state).await {
                    Ok(()) => tracing::info!("reload successful"),
                    Err(e) => tracing::error!(error = %e, "reload failed; keeping previous library"),
                }
            }
        }
    });

    // Pingora owns its own runtimes
    let server = build_pingora_server(&config, state)?;

    if let Some(pid_file) = config.server.pid_file.clone() {
        ctrlc::set_handler(move || {
            tracing::info!("shutdown requested, removing pid file");
            pid::remove_pid(&pid_file);
            std::process::exit(0);
        })?;
    }

    // control_rt must stay in scope so its worker thread lives.
    server.run_forever();
}

/// Build and bootstrap the Pingora server with one HTTP service on `listen`.
pub fn build_pingora_server(
    config: &RuntimeConfig,
    state: Arc<ArcSwap<RuntimeState>>,
) -> Result<Server, Error> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new().context("could not construct Pingora server configuration")?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = MediaGateway { state };

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}
