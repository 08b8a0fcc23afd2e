//! Range-aware media file serving.
//!
//! A request names a library entity and a file below its root directory:
//! `/<prefix>/<collection>/<entity-id>/<relative/path>`. The entity is
//! resolved through an [`EntityRegistry`](crate::library::EntityRegistry),
//! the relative path is sanitized, and the file is served honoring
//! `Range`, `If-Range` and `If-None-Match`.

mod address;
mod etag;
mod headers;
mod mime;
mod negotiate;
mod range;
mod response;
mod sanitize;
mod serve;
mod stream_url;

#[cfg(test)]
mod tests;

pub use address::{AddressError, MediaAddress, parse_media_path};
pub use etag::{compute_etag, etag_matches, if_range_matches};
pub use mime::content_type_for;
pub use negotiate::{Negotiation, negotiate};
pub use range::{RangeRequest, parse_range_header};
pub use response::{ConditionalHeaders, MediaRequest, StreamBody, StreamResponse};
pub use sanitize::{resolve_media_path, sanitize_relative_path};
pub use serve::{ServeError, serve_media};
pub use stream_url::stream_url;
