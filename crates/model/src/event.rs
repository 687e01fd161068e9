use serde::{Deserialize, Serialize};

/// Inbound Lambda event, resolved to exactly one shape at the boundary.
///
/// Variants are tried in declaration order, so precedence is: HTTP
/// request, SNS notification, bare toggle update, anything else. The
/// shapes are deliberately minimal; they require only the fields the
/// handlers actually read, so classification stays lenient about the
/// rest of the envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InboundEvent {
    Http(HttpRequest),
    Notification(NotificationEvent),
    ToggleUpdate(ToggleUpdate),
    Unknown(serde_json::Value),
}

/// API Gateway HTTP API (payload v2) request, cut down to the routed
/// fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub request_context: RequestContext,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestContext {
    pub http: HttpDescription,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpDescription {
    pub method: String,
    pub path: String,
}

impl HttpRequest {
    pub fn method(&self) -> &str {
        &self.request_context.http.method
    }

    pub fn path(&self) -> &str {
        &self.request_context.http.path
    }
}

/// SNS delivery envelope. The alarm document itself lives in the
/// `Message` string of each record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records")]
    pub records: Vec<NotificationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsPayload {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Legacy direct invocation: a bare `{status}` object with no event
/// envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleUpdate {
    pub status: String,
}
