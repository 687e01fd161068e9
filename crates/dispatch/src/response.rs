use model::Response;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Fixed CORS policy. The dashboard is served from a different origin,
/// so every HTTP-shaped response carries these headers unconditionally.
fn cors_headers() -> HashMap<String, String> {
    [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
        ("Content-Type", "application/json"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// An HTTP-shaped response: JSON body plus the CORS headers.
pub(crate) fn http(status_code: u16, body: Value) -> Response {
    Response {
        status_code,
        headers: Some(cors_headers()),
        body: body.to_string(),
    }
}

pub(crate) fn error(status_code: u16, message: impl Into<String>) -> Response {
    http(status_code, json!({"error": message.into()}))
}

/// 400 echoing the unrecognised event back for operator diagnosis.
pub(crate) fn unknown_event(event: Value) -> Response {
    http(
        400,
        json!({"error": "Unknown event type", "event": event.to_string()}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_responses_carry_the_cors_headers() {
        let response: Response = http(200, json!({"message": "OK"}));
        let headers: &HashMap<String, String> = response.headers.as_ref().unwrap();

        assert_eq!("*", headers["Access-Control-Allow-Origin"]);
        assert_eq!("GET, POST, OPTIONS", headers["Access-Control-Allow-Methods"]);
        assert_eq!(
            "Content-Type, Authorization",
            headers["Access-Control-Allow-Headers"]
        );
        assert_eq!("application/json", headers["Content-Type"]);
    }
}
