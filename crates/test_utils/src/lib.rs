use lambda_runtime::{Context, LambdaEvent};
use model::event::{
    HttpDescription, HttpRequest, InboundEvent, NotificationEvent, NotificationRecord,
    RequestContext, SnsPayload,
};
use serde_json::json;

/// Wrap a classified event the way the Lambda runtime delivers it.
pub fn lambda_event(payload: InboundEvent) -> LambdaEvent<InboundEvent> {
    LambdaEvent::new(payload, Context::default())
}

/// An API Gateway HTTP API request with an optional JSON body.
pub fn api_request(method: &str, path: &str, body: Option<&str>) -> InboundEvent {
    InboundEvent::Http(HttpRequest {
        request_context: RequestContext {
            http: HttpDescription {
                method: method.to_string(),
                path: path.to_string(),
            },
        },
        body: body.map(str::to_string),
    })
}

/// An SNS-delivered CloudWatch alarm naming `instance_id` in its
/// trigger dimensions, or carrying no `InstanceId` dimension at all.
pub fn alarm_event(instance_id: Option<&str>) -> InboundEvent {
    let dimensions: Vec<serde_json::Value> = match instance_id {
        Some(id) => vec![json!({"value": id, "name": "InstanceId"})],
        None => vec![json!({"value": "eu-west-1", "name": "Region"})],
    };

    let message: String = json!({
        "AlarmName": "ec2-idle-alarm",
        "NewStateValue": "ALARM",
        "Trigger": {
            "MetricName": "CPUUtilization",
            "Namespace": "AWS/EC2",
            "Dimensions": dimensions
        }
    })
    .to_string();

    InboundEvent::Notification(NotificationEvent {
        records: vec![NotificationRecord {
            sns: SnsPayload { message },
        }],
    })
}

/// An alarm record whose `Message` is not valid JSON.
pub fn garbled_alarm_event() -> InboundEvent {
    InboundEvent::Notification(NotificationEvent {
        records: vec![NotificationRecord {
            sns: SnsPayload {
                message: "not-json".to_string(),
            },
        }],
    })
}
