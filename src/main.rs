use aws_config::BehaviorVersion;
use compute_ec2::Ec2ComputeControl;
use lambda_runtime::{service_fn, tracing, Error, LambdaEvent};
use model::env::{
    DEFAULT_SAVINGS_LOG_TABLE, DEFAULT_TOGGLE_TABLE, SAVINGS_LOG_TABLE_NAME, TOGGLE_TABLE_NAME,
};
use model::event::InboundEvent;
use state_dynamodb::DynamoDbStateStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let toggle_table: String =
        std::env::var(TOGGLE_TABLE_NAME).unwrap_or_else(|_| DEFAULT_TOGGLE_TABLE.to_string());
    let log_table: String = std::env::var(SAVINGS_LOG_TABLE_NAME)
        .unwrap_or_else(|_| DEFAULT_SAVINGS_LOG_TABLE.to_string());

    // Clients are created once at cold start and reused across invocations
    let store: DynamoDbStateStore = DynamoDbStateStore::new(
        aws_sdk_dynamodb::Client::new(&config),
        toggle_table,
        log_table,
    );
    let control: Ec2ComputeControl = Ec2ComputeControl::new(aws_sdk_ec2::Client::new(&config));

    let store_ref: &DynamoDbStateStore = &store;
    let control_ref: &Ec2ComputeControl = &control;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InboundEvent>| async move {
        dispatch::handle(event, store_ref, control_ref).await
    }))
    .await
}
