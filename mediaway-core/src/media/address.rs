use crate::library::Collection;
use uuid::Uuid;

/// A parsed `/<prefix>/<collection>/<entity-id>/<relative...>` request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAddress {
    pub collection: Collection,
    pub id: Uuid,
    /// Percent-decoded path below the entity root. Not yet sanitized.
    pub relative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("path is not below the media prefix")]
    OutsidePrefix,

    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    #[error("invalid entity id '{0}'")]
    InvalidId(String),

    #[error("missing file path")]
    MissingPath,

    #[error("file path is not valid UTF-8")]
    BadEncoding,
}

/// Split a request path into its collection, entity id and relative file path.
///
/// `prefix` is the mount point (e.g. `/upnp`); a trailing slash is ignored.
/// Empty segments between the prefix, collection and id are skipped. The
/// relative part is percent-decoded exactly once.
pub fn parse_media_path(prefix: &str, request_path: &str) -> Result<MediaAddress, AddressError> {
    let prefix = prefix.trim_end_matches('/');

    let rest = request_path
        .strip_prefix(prefix)
        .ok_or(AddressError::OutsidePrefix)?;

    // "/upnpfoo" must not match prefix "/upnp".
    if !rest.is_empty() && !rest.starts_with('/') {
        return Err(AddressError::OutsidePrefix);
    }

    let (collection, rest) = next_segment(rest).ok_or(AddressError::MissingPath)?;
    let collection = collection
        .parse::<Collection>()
        .map_err(|e| AddressError::UnknownCollection(e.0))?;

    let (id, relative) = next_segment(rest).ok_or(AddressError::MissingPath)?;
    let id = Uuid::parse_str(id).map_err(|_| AddressError::InvalidId(id.to_string()))?;

    if relative.is_empty() {
        return Err(AddressError::MissingPath);
    }

    let relative = percent_encoding::percent_decode_str(relative)
        .decode_utf8()
        .map_err(|_| AddressError::BadEncoding)?
        .into_owned();

    Ok(MediaAddress {
        collection,
        id,
        relative,
    })
}

/// Pop the next non-empty segment. Returns the segment and whatever follows its
/// terminating slash (or an empty string at the end of the path).
fn next_segment(path: &str) -> Option<(&str, &str)> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }

    Some(path.split_once('/').unwrap_or((path, "")))
}
