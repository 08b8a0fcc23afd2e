use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, header};
use tokio::fs;

#[derive(Debug)]
pub enum StreamBody {
    Empty,
    /// Short plain-text bodies for error responses.
    Bytes(Bytes),
    /// A file handle already positioned at the first byte to send.
    /// Exactly `remaining` bytes are to be written.
    File { file: fs::File, remaining: u64 },
}

#[derive(Debug)]
pub struct StreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: StreamBody,
}

/// Conditional request headers for range negotiation and cache validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConditionalHeaders {
    pub range: Option<String>,
    pub if_range: Option<String>,
    pub if_none_match: Option<String>,
}

impl ConditionalHeaders {
    /// Extract the headers from a request.
    ///
    /// A value with non-ASCII bytes is still present: it is decoded lossily, so
    /// it can never equal an ETag and never parses as a range.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: header::HeaderName| {
            headers
                .get(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        };

        Self {
            range: get(header::RANGE),
            if_range: get(header::IF_RANGE),
            if_none_match: get(header::IF_NONE_MATCH),
        }
    }
}

/// Everything the file server needs to know about an inbound request.
#[derive(Debug, Clone)]
pub struct MediaRequest {
    pub method: Method,
    /// Request path without the query string, still percent-encoded.
    pub path: String,
    pub conditional: ConditionalHeaders,
}

impl MediaRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            conditional: ConditionalHeaders::default(),
        }
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self {
            method: Method::HEAD,
            ..Self::get(path)
        }
    }

    pub fn with_range(mut self, value: impl Into<String>) -> Self {
        self.conditional.range = Some(value.into());
        self
    }

    pub fn with_if_range(mut self, value: impl Into<String>) -> Self {
        self.conditional.if_range = Some(value.into());
        self
    }

    pub fn with_if_none_match(mut self, value: impl Into<String>) -> Self {
        self.conditional.if_none_match = Some(value.into());
        self
    }

    pub fn is_head(&self) -> bool {
        self.method == Method::HEAD
    }
}
