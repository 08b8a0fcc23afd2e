use http::{HeaderMap, HeaderName, HeaderValue, header};

#[derive(Debug, Default)]
pub(crate) struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Inserts (or removes) a header from the header map.
    ///
    /// Converts the provided string value into a `HeaderValue`. If the conversion fails
    /// or results in an empty value, the header is removed from the map. Otherwise,
    /// the header is inserted with the given name and value.
    pub(crate) fn insert(&mut self, header_name: HeaderName, value: &str) {
        let header_value = HeaderValue::from_str(value).unwrap_or(HeaderValue::from_static(""));
        if header_value.is_empty() {
            self.headers.remove(header_name);
        } else {
            self.headers.insert(header_name, header_value);
        }
    }

    pub(crate) fn accept_ranges(&mut self) {
        self.insert(header::ACCEPT_RANGES, "bytes");
    }

    pub(crate) fn content_type(&mut self, value: &str) {
        self.insert(header::CONTENT_TYPE, value);
    }

    pub(crate) fn content_length(&mut self, len: u64) {
        self.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    }

    pub(crate) fn content_range(&mut self, start: u64, end: u64, len: u64) {
        self.insert(
            header::CONTENT_RANGE,
            &format!("bytes {start}-{end}/{len}"),
        );
    }

    /// `Content-Range` for a 416: tells the client the real length.
    pub(crate) fn unsatisfied_range(&mut self, len: u64) {
        self.insert(header::CONTENT_RANGE, &format!("bytes */{len}"));
    }

    pub(crate) fn etag(&mut self, value: &str) {
        self.insert(header::ETAG, value);
    }

    pub(crate) fn build(self) -> HeaderMap {
        self.headers
    }
}
