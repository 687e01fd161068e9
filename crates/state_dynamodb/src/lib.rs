use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::{GetItemError, GetItemOutput};
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use model::{SavingsLogRecord, ToggleRecord, ToggleStatus};
use state::StateErrorReason::{BackendFailure, BadItem};
use state::StateOperation::{AppendLog, GetToggle, PutToggle, ScanLogs};
use state::{StateError, StateStore};
use std::collections::HashMap;

const TOGGLE_KEY: &str = "toggle_name";

/// DynamoDB-backed store over two tables: the toggle table keyed by
/// `toggle_name` and the savings log table keyed by `id`.
pub struct DynamoDbStateStore {
    toggle_table: String,
    log_table: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
    consistent_read: bool,
}

impl DynamoDbStateStore {
    pub fn new(
        dynamodb_client: aws_sdk_dynamodb::Client,
        toggle_table: String,
        log_table: String,
    ) -> DynamoDbStateStore {
        DynamoDbStateStore {
            toggle_table,
            log_table,
            dynamodb_client,
            // The dashboard tolerates slightly stale reads
            consistent_read: false,
        }
    }
}

#[async_trait]
impl StateStore for DynamoDbStateStore {
    async fn get_toggle(&self, name: &str) -> Result<Option<ToggleStatus>, StateError> {
        let output: GetItemOutput = self
            .get_item(&self.toggle_table, &[(TOGGLE_KEY, name)])
            .await
            .map_err(|err| {
                StateError::new(name.to_string(), GetToggle, BackendFailure(err.into()))
            })?;

        let Some(item) = output.item else {
            return Ok(None);
        };

        let record: ToggleRecord = serde_dynamo::from_item(item).map_err(|err| {
            StateError::new(name.to_string(), GetToggle, BadItem(err.to_string()))
        })?;

        Ok(Some(record.status))
    }

    async fn put_toggle(&self, name: &str, status: ToggleStatus) -> Result<(), StateError> {
        let record: ToggleRecord = ToggleRecord {
            toggle_name: name.to_string(),
            status,
        };

        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(&record)
            .map_err(|err| {
                StateError::new(name.to_string(), PutToggle, BadItem(err.to_string()))
            })?;

        self.put_item(&self.toggle_table, item).await.map_err(|err| {
            StateError::new(name.to_string(), PutToggle, BackendFailure(err.into()))
        })?;

        Ok(())
    }

    async fn append_log(&self, record: SavingsLogRecord) -> Result<(), StateError> {
        let record_id: String = record.id.clone();

        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(&record)
            .map_err(|err| {
                StateError::new(record_id.clone(), AppendLog, BadItem(err.to_string()))
            })?;

        self.put_item(&self.log_table, item).await.map_err(|err| {
            StateError::new(record_id.clone(), AppendLog, BackendFailure(err.into()))
        })?;

        Ok(())
    }

    async fn scan_logs(&self) -> Result<Vec<SavingsLogRecord>, StateError> {
        let mut records: Vec<SavingsLogRecord> = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A single scan call truncates at 1 MB, so follow the cursor
        loop {
            let output = self
                .dynamodb_client
                .scan()
                .table_name(&self.log_table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|err| {
                    StateError::new(
                        self.log_table.clone(),
                        ScanLogs,
                        BackendFailure(err.into()),
                    )
                })?;

            let page: Vec<SavingsLogRecord> =
                serde_dynamo::from_items(output.items.unwrap_or_default()).map_err(|err| {
                    StateError::new(self.log_table.clone(), ScanLogs, BadItem(err.to_string()))
                })?;

            records.extend(page);

            match output.last_evaluated_key {
                Some(key) => start_key = Some(key),
                None => break,
            }
        }

        Ok(records)
    }
}

impl DynamoDbStateStore {
    async fn get_item(
        &self,
        table_name: &str,
        key_parts: &[(&str, &str)],
    ) -> Result<GetItemOutput, SdkError<GetItemError, HttpResponse>> {
        let key: HashMap<String, AttributeValue> = key_parts
            .iter()
            .map(|&(k, v)| (k.to_string(), AttributeValue::S(v.to_string())))
            .collect();

        self.dynamodb_client
            .get_item()
            .table_name(table_name)
            .consistent_read(self.consistent_read)
            .set_key(Some(key))
            .send()
            .await
    }

    async fn put_item(
        &self,
        table_name: &str,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}
