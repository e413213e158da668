//! Jobs - a Lambda that returns every item in the `jobs` DynamoDB table.
//!
//! Each invocation issues a single unfiltered scan against the table and
//! answers with `{ "statusCode": 200, "body": <scan result as JSON> }`. The
//! scan is not paginated and failures are not caught: they surface as
//! invocation errors reported by the Lambda runtime.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - DynamoDB as the table store, behind the `TableScanner` trait
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use jobs::api::handler::handle;
//! use jobs::core::config::AppConfig;
//! use jobs::storage::DynamoScanner;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     jobs::setup_logging();
//!
//!     let config = AppConfig::default();
//!     let scanner = DynamoScanner::from_config(&config).await;
//!
//!     let response = handle(&scanner, &config, &serde_json::Value::Null).await?;
//!     println!("{}: {}", response.status_code, response.body);
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod storage;

pub use errors::JobsError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda binary; later calls are no-ops.
///
/// # Example
///
/// ```
/// jobs::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
