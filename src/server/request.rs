use may_minihttp::Request;

/// The parts of a request the link service looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path without query string
    pub path: String,
}

/// Extract method and path from a `may_minihttp::Request`.
#[must_use]
pub fn parse_request(req: &Request) -> ParsedRequest {
    ParsedRequest {
        method: req.method().to_string(),
        path: strip_query(req.path()).to_string(),
    }
}

fn strip_query(raw: &str) -> &str {
    match raw.split_once('?') {
        Some(("", _)) => "/",
        Some((path, _)) => path,
        None if raw.is_empty() => "/",
        None => raw,
    }
}
