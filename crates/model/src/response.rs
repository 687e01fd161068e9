use serde::Serialize;
use std::collections::HashMap;

/// Lambda proxy response.
///
/// HTTP-shaped responses carry headers; the SNS and direct-invocation
/// paths return a bare status/body pair, so `headers` is omitted from
/// the wire when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    pub body: String,
}

impl Response {
    /// A header-less response for the non-HTTP event paths.
    pub fn plain(status_code: u16, body: impl Into<String>) -> Response {
        Response {
            status_code,
            headers: None,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_response_omits_headers() {
        let response = Response::plain(200, "done");
        let json: serde_json::Value = serde_json::to_value(&response).unwrap();

        assert_eq!(200, json["statusCode"]);
        assert_eq!("done", json["body"]);
        assert!(json.get("headers").is_none());
    }
}
