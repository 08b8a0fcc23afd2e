use crate::media::{ConditionalHeaders, MediaRequest, StreamBody, StreamResponse, serve_media};
use crate::server::runtime::RuntimeState;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use bytes::BytesMut;
use pingora::prelude::*;
use pingora::protocols::l4::socket::SocketAddr as PingoraSocketAddr;
use pingora_http::ResponseHeader;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 32 * 1024;

/// Serves the media tree directly from `request_filter`. Nothing is ever proxied.
pub struct MediaGateway {
    // Runtime state
    pub state: Arc<ArcSwap<RuntimeState>>,
}

/// Per-request bookkeeping for the completion log line.
pub struct MediaCtx {
    pub peer_ip: IpAddr,
    pub started: Instant,
    pub status: Option<u16>,
}

#[async_trait]
impl ProxyHttp for MediaGateway {
    type CTX = MediaCtx;

    fn new_ctx(&self) -> Self::CTX {
        MediaCtx {
            peer_ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            started: Instant::now(),
            status: None,
        }
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        Err(Error::new(Custom("media gateway has no upstreams")))
    }

    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        ctx.peer_ip = match session.client_addr() {
            Some(PingoraSocketAddr::Inet(addr)) => addr.ip(),
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let req = session.req_header();
        tracing::info!(
            peer = %ctx.peer_ip,
            method = %req.method,
            uri = %req.uri,
            "incoming request"
        );

        let request = MediaRequest {
            method: req.method.clone(),
            path: req.uri.path().to_string(),
            conditional: ConditionalHeaders::from_headers(&req.headers),
        };

        // Hold one snapshot for the whole request; a reload mid-stream does not
        // change which file is being sent.
        let state = self.state.load_full();
        let response = serve_media(&request, &state.prefix, &state.library).await;

        ctx.status = Some(response.status.as_u16());
        write_stream_response(session, response, request.is_head()).await?;

        Ok(true)
    }

    async fn logging(&self, _session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        let elapsed_ms = ctx.started.elapsed().as_millis() as u64;
        match e {
            Some(err) => tracing::warn!(
                peer = %ctx.peer_ip,
                status = ?ctx.status,
                elapsed_ms,
                error = %err,
                "request aborted"
            ),
            None => tracing::info!(
                peer = %ctx.peer_ip,
                status = ?ctx.status,
                elapsed_ms,
                "request completed"
            ),
        }
    }
}

/// Write a `StreamResponse` to the downstream session and end the stream.
///
/// File bodies are sent in bounded chunks so a large range never sits in memory
/// at once. HEAD requests get the headers only.
pub async fn write_stream_response(
    session: &mut Session,
    response: StreamResponse,
    head_only: bool,
) -> Result<()> {
    let mut resp = ResponseHeader::build(response.status, None)?;

    for (name, value) in response.headers.iter() {
        resp.insert_header(name.clone(), value.clone())?;
    }

    session.write_response_header(Box::new(resp), false).await?;

    if head_only {
        session.write_response_body(None, true).await?;
        return Ok(());
    }

    match response.body {
        StreamBody::Empty => {
            session.write_response_body(None, true).await?;
        }

        StreamBody::Bytes(bytes) => {
            session.write_response_body(Some(bytes), true).await?;
        }

        StreamBody::File {
            mut file,
            mut remaining,
        } => {
            let mut buf = BytesMut::with_capacity(CHUNK_SIZE);

            while remaining > 0 {
                let to_read = std::cmp::min(CHUNK_SIZE as u64, remaining) as usize;
                buf.resize(to_read, 0);

                let n = match file.read(&mut buf[..]).await {
                    Ok(n) => n,
                    Err(err) => {
                        // Headers are already on the wire; all we can do is drop the connection.
                        tracing::warn!(error = %err, remaining, "media file read failed mid-stream");
                        return Err(Error::new(Custom("media file read error")));
                    }
                };

                if n == 0 {
                    tracing::warn!(remaining, "media file shrank while streaming");
                    return Err(Error::new(Custom("media file truncated")));
                }

                remaining -= n as u64;
                buf.truncate(n);

                session
                    .write_response_body(Some(buf.split().freeze()), false)
                    .await?;
            }

            session.write_response_body(None, true).await?;
        }
    }

    Ok(())
}
