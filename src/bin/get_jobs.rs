use jobs::api::handler;
use jobs::core::config::AppConfig;
use jobs::storage::DynamoScanner;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    jobs::setup_logging();

    let config = AppConfig::default();
    let scanner = DynamoScanner::from_config(&config).await;

    run(service_fn(|event: LambdaEvent<Value>| {
        handler(&scanner, &config, event)
    }))
    .await
}
