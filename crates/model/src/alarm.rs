use serde::Deserialize;

/// Name of the metric dimension identifying the instance to stop.
pub const INSTANCE_ID_DIMENSION: &str = "InstanceId";

/// CloudWatch alarm payload carried in the SNS `Message` string.
///
/// Only the trigger dimensions are read; everything else in the alarm
/// document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AlarmMessage {
    #[serde(rename = "Trigger", default)]
    pub trigger: Option<Trigger>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Trigger {
    #[serde(rename = "Dimensions", default)]
    pub dimensions: Vec<Dimension>,
}

/// Dimension entries use lowercase keys on the wire, unlike the rest
/// of the alarm document.
#[derive(Debug, Clone, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl AlarmMessage {
    /// The `InstanceId` dimension value, if the alarm names one.
    pub fn instance_id(&self) -> Option<&str> {
        self.trigger
            .as_ref()?
            .dimensions
            .iter()
            .find(|dimension| dimension.name == INSTANCE_ID_DIMENSION)
            .map(|dimension| dimension.value.as_str())
    }
}
