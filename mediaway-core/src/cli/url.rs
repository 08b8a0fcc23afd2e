use crate::conf::load_config;
use crate::library::{Collection, EntityRegistry};
use crate::media::stream_url;
use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::Path;
use url::Url;
use uuid::Uuid;

/// Print the stream URL for a file below a library entity.
pub fn url(
    config_dir: &Path,
    collection: Collection,
    id: Uuid,
    relative: &str,
    base: Option<&str>,
) -> Result<()> {
    let cfg = load_config(config_dir)?;

    if cfg.library.lookup(collection, id).is_none() {
        tracing::warn!(%collection, %id, "entity is not in the library; the URL will answer 400");
    }

    let base = match base {
        Some(base) => Url::parse(base).with_context(|| format!("invalid base URL '{base}'"))?,
        None => base_from_listen(&cfg.server.listen)?,
    };

    let url = stream_url(&base, &cfg.server.prefix, collection, id, relative)
        .context("failed to build stream URL")?;

    println!("{url}");
    Ok(())
}

/// `http://<listen>/`, swapping an unspecified bind address for loopback.
pub fn base_from_listen(listen: &str) -> Result<Url> {
    let mut addr: SocketAddr = listen
        .parse()
        .map_err(|_| anyhow!("invalid listen address '{listen}'"))?;

    if addr.ip().is_unspecified() {
        let loopback = if addr.is_ipv4() {
            std::net::Ipv4Addr::LOCALHOST.into()
        } else {
            std::net::Ipv6Addr::LOCALHOST.into()
        };
        addr.set_ip(loopback);
    }

    Ok(Url::parse(&format!("http://{addr}/"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_listen_becomes_loopback() {
        let url = base_from_listen("0.0.0.0:8008").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8008/");

        let url = base_from_listen("[::]:8008").unwrap();
        assert_eq!(url.as_str(), "http://[::1]:8008/");
    }

    #[test]
    fn concrete_listen_is_kept() {
        let url = base_from_listen("192.168.1.20:8008").unwrap();
        assert_eq!(url.as_str(), "http://192.168.1.20:8008/");
    }
}
