use may_minihttp::Response;
use serde_json::Value;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Write a rendered HTML document.
pub fn write_html(res: &mut Response, body: String) {
    res.status_code(200, "OK");
    res.header("Content-Type: text/html; charset=utf-8");
    res.body_vec(body.into_bytes());
}

/// Write a JavaScript source body.
pub fn write_javascript(res: &mut Response, body: &str) {
    res.status_code(200, "OK");
    res.header("Content-Type: application/javascript; charset=utf-8");
    res.body_vec(body.as_bytes().to_vec());
}

/// Write a JSON error body with the given status.
pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}
