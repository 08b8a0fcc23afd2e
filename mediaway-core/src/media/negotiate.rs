use crate::media::etag::{etag_matches, if_range_matches};
use crate::media::range::parse_range_header;
use crate::media::response::ConditionalHeaders;

/// Outcome of evaluating the conditional and range headers against the current file state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    /// 304, no body.
    NotModified,
    /// 206, bytes `start..=end`.
    Partial { start: u64, end: u64 },
    /// 416, `Content-Range: bytes */len`.
    Unsatisfiable,
    /// 200, the whole file.
    Full,
}

/// Decide how to answer a request for a file of `len` bytes whose current validator is `etag`.
///
/// Rules are evaluated top to bottom, first match wins:
///
/// | range | If-Range | start     | If-None-Match | result        |
/// |-------|----------|-----------|---------------|---------------|
/// | yes   | ok       | `< len`   | hit           | NotModified   |
/// | yes   | ok       | `< len`   | -             | Partial       |
/// | yes   | ok       | `>= len`  | -             | Unsatisfiable |
/// | no    | -        | -         | hit           | NotModified   |
/// | -     | mismatch | -         | hit           | NotModified   |
/// | otherwise                                    || Full          |
///
/// A malformed `Range` counts as no range at all.
pub fn negotiate(conditional: &ConditionalHeaders, etag: &str, len: u64) -> Negotiation {
    let range = conditional.range.as_deref().and_then(parse_range_header);
    let if_range_ok = if_range_matches(etag, conditional.if_range.as_deref());
    let if_none_match_hit = conditional
        .if_none_match
        .as_deref()
        .is_some_and(|inm| etag_matches(etag, inm));

    match range {
        Some(range) if if_range_ok && range.start < len => {
            if if_none_match_hit {
                Negotiation::NotModified
            } else {
                Negotiation::Partial {
                    start: range.start,
                    end: range.last_byte(len),
                }
            }
        }
        Some(_) if if_range_ok => Negotiation::Unsatisfiable,
        None if if_none_match_hit => Negotiation::NotModified,
        // A stale If-Range would hand back the whole (changed) file; a matching
        // If-None-Match still wins.
        _ if !if_range_ok && if_none_match_hit => Negotiation::NotModified,
        _ => Negotiation::Full,
    }
}
