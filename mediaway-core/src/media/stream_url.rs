use crate::library::Collection;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;
use uuid::Uuid;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'^')
    .add(b'|');

/// Build the URL a renderer uses to stream `relative` of the given entity.
///
/// `relative` uses `/` as the separator; each segment is percent-encoded on its own.
pub fn stream_url(
    base: &Url,
    prefix: &str,
    collection: Collection,
    id: Uuid,
    relative: &str,
) -> Result<Url, url::ParseError> {
    let mut path = String::from(prefix.trim_end_matches('/'));
    path.push('/');
    path.push_str(collection.as_str());
    path.push('/');
    path.push_str(&id.hyphenated().to_string());

    for segment in relative.split(['/', '\\']).filter(|s| !s.is_empty()) {
        path.push('/');
        path.push_str(&utf8_percent_encode(segment, SEGMENT).to_string());
    }

    base.join(&path)
}
