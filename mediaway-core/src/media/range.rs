/// Byte window requested through a `Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRequest {
    pub start: u64,
    /// Inclusive. `None` means "through the end of the file".
    pub end: Option<u64>,
}

impl RangeRequest {
    /// Last byte to send for a resource of `len` bytes.
    ///
    /// An open or oversized end is clamped to the final byte, so the
    /// advertised `Content-Length` always matches what can be read.
    pub fn last_byte(&self, len: u64) -> u64 {
        let last = len.saturating_sub(1);
        self.end.map_or(last, |end| end.min(last))
    }
}

/// Parse a single `bytes=<start>-<end?>` range.
///
/// Anything else (suffix ranges, multiple ranges, garbage, `end < start`)
/// yields `None` and the request is served as if no range was asked for.
pub fn parse_range_header(header: &str) -> Option<RangeRequest> {
    let ranges = header.trim().strip_prefix("bytes=")?;
    let (start, end) = ranges.split_once('-')?;

    let start = start.trim().parse::<u64>().ok()?;
    let end = match end.trim() {
        "" => None,
        v => Some(v.parse::<u64>().ok()?),
    };

    if end.is_some_and(|end| end < start) {
        return None;
    }

    Some(RangeRequest { start, end })
}
