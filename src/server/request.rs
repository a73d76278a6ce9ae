use may_minihttp::Request;
use tracing::debug;

/// Parsed HTTP request data used by [`ApiReferenceService`](super::ApiReferenceService).
///
/// The plugin routes on method and path alone; headers and body are never
/// inspected.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path without the query string
    pub path: String,
}

/// Extract method and path from a `may_minihttp::Request`.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let raw_path = req.path().to_string();
    let path = raw_path.split('?').next().unwrap_or("/").to_string();

    debug!(method = %method, path = %path, "request parsed");

    ParsedRequest { method, path }
}
