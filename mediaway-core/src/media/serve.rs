use std::io::SeekFrom;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use http::{Method, StatusCode};
use tokio::fs;
use tokio::io::AsyncSeekExt;
use uuid::Uuid;

use crate::library::{Collection, EntityRegistry};
use crate::media::address::{AddressError, parse_media_path};
use crate::media::etag::compute_etag;
use crate::media::headers::HeaderBuilder;
use crate::media::mime::content_type_for;
use crate::media::negotiate::{Negotiation, negotiate};
use crate::media::response::{ConditionalHeaders, MediaRequest, StreamBody, StreamResponse};
use crate::media::sanitize::resolve_media_path;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const BAD_REQUEST_BODY: &str = "BAD REQUEST";
const FORBIDDEN_BODY: &str = "FORBIDDEN: Reading file failed.";

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("method {0} is not supported")]
    Method(Method),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error("no {collection} entry with id {id}")]
    UnknownEntity { collection: Collection, id: Uuid },

    #[error("unsafe file path '{0}'")]
    UnsafePath(String),

    #[error("reading file failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ServeError {
    fn status(&self) -> StatusCode {
        match self {
            ServeError::Io(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Answer one media request.
///
/// Never fails: addressing problems become `400`, file access problems `403`.
/// Nothing on disk is touched unless the entity resolved and the relative path
/// survived sanitization.
pub async fn serve_media<R>(request: &MediaRequest, prefix: &str, registry: &R) -> StreamResponse
where
    R: EntityRegistry + ?Sized,
{
    let path = match resolve_request(request, prefix, registry) {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(path = %request.path, error = %err, "rejecting media request");
            return error_response(&err);
        }
    };

    match render_media_file(&path, &request.conditional, request.is_head()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "error reading file");
            error_response(&err)
        }
    }
}

fn resolve_request<R>(
    request: &MediaRequest,
    prefix: &str,
    registry: &R,
) -> Result<PathBuf, ServeError>
where
    R: EntityRegistry + ?Sized,
{
    if request.method != Method::GET && request.method != Method::HEAD {
        return Err(ServeError::Method(request.method.clone()));
    }

    let address = parse_media_path(prefix, &request.path)?;

    let root = registry
        .lookup(address.collection, address.id)
        .ok_or(ServeError::UnknownEntity {
            collection: address.collection,
            id: address.id,
        })?;

    resolve_media_path(&root, &address.relative).ok_or(ServeError::UnsafePath(address.relative))
}

async fn render_media_file(
    path: &Path,
    conditional: &ConditionalHeaders,
    head_only: bool,
) -> Result<StreamResponse, ServeError> {
    let metadata = fs::metadata(path).await?;

    if !metadata.is_file() {
        return Err(std::io::Error::other("not a regular file").into());
    }

    let len = metadata.len();
    let etag = compute_etag(path, metadata.modified().ok(), len);
    let decision = negotiate(conditional, &etag, len);

    tracing::debug!(path = %path.display(), len, etag = %etag, ?decision, "serving media file");

    let mut headers = HeaderBuilder::default();

    let (status, body) = match decision {
        Negotiation::NotModified => {
            headers.content_type(&content_type_for(path));
            headers.etag(&etag);
            (StatusCode::NOT_MODIFIED, StreamBody::Empty)
        }

        Negotiation::Unsatisfiable => {
            headers.content_type(TEXT_PLAIN);
            headers.unsatisfied_range(len);
            headers.etag(&etag);
            headers.content_length(0);
            (StatusCode::RANGE_NOT_SATISFIABLE, StreamBody::Empty)
        }

        Negotiation::Partial { start, end } => {
            let remaining = end - start + 1;

            headers.content_type(&content_type_for(path));
            headers.accept_ranges();
            headers.content_length(remaining);
            headers.content_range(start, end, len);
            headers.etag(&etag);

            let body = if head_only {
                StreamBody::Empty
            } else {
                open_at(path, start, remaining).await?
            };
            (StatusCode::PARTIAL_CONTENT, body)
        }

        Negotiation::Full => {
            headers.content_type(&content_type_for(path));
            headers.accept_ranges();
            headers.content_length(len);
            headers.etag(&etag);

            let body = if head_only {
                StreamBody::Empty
            } else {
                open_at(path, 0, len).await?
            };
            (StatusCode::OK, body)
        }
    };

    Ok(StreamResponse {
        status,
        headers: headers.build(),
        body,
    })
}

async fn open_at(path: &Path, start: u64, remaining: u64) -> Result<StreamBody, ServeError> {
    let mut file = fs::File::open(path).await?;
    if start > 0 {
        file.seek(SeekFrom::Start(start)).await?;
    }

    Ok(StreamBody::File { file, remaining })
}

fn error_response(err: &ServeError) -> StreamResponse {
    let status = err.status();
    let body = if status == StatusCode::FORBIDDEN {
        FORBIDDEN_BODY
    } else {
        BAD_REQUEST_BODY
    };

    let mut headers = HeaderBuilder::default();
    headers.content_type(TEXT_PLAIN);
    headers.content_length(body.len() as u64);

    StreamResponse {
        status,
        headers: headers.build(),
        body: StreamBody::Bytes(Bytes::from_static(body.as_bytes())),
    }
}
