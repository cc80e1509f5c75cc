use http::StatusCode;
use may_minihttp::Response;
use serde::Serialize;
use serde_json::Value;
use tracing::error;

fn status_reason(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("OK")
}

/// Serialize `body` as the JSON response.
///
/// A body that fails to serialize turns into a 500 with an error object.
pub fn write_json<T: Serialize>(res: &mut Response, status: u16, body: &T) {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            res.status_code(status as usize, status_reason(status));
            res.header("Content-Type: application/json");
            res.body_vec(bytes);
        }
        Err(err) => {
            error!(error = %err, "Failed to serialize response body");
            write_json_error(
                res,
                500,
                serde_json::json!({ "error": "Response serialization failed" }),
            );
        }
    }
}

pub fn write_json_error(res: &mut Response, status: u16, body: Value) {
    res.status_code(status as usize, status_reason(status));
    res.header("Content-Type: application/json");
    res.body_vec(body.to_string().into_bytes());
}
