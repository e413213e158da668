//! API Lambda handler: scans the jobs table and returns everything in it.
//!
//! There is no routing and no input handling. Every invocation issues the
//! same unfiltered scan and wraps the raw result in a 200 response. Storage
//! and serialization failures are returned as errors so the runtime reports
//! a failed invocation.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info, warn};

use super::response::HttpResponse;
use crate::core::config::AppConfig;
use crate::errors::JobsError;
use crate::storage::{ScanRequest, TableScanner};

pub use self::function_handler as handler;

/// Scans the configured table once and serializes the result as the body.
///
/// The event is accepted but never read.
///
/// # Errors
///
/// Returns the scanner's error unchanged, or `SerializationError` if the
/// result cannot be encoded.
pub async fn handle<S>(
    scanner: &S,
    config: &AppConfig,
    _event: &Value,
) -> Result<HttpResponse, JobsError>
where
    S: TableScanner + ?Sized,
{
    let request = ScanRequest::for_table(&config.table_name);
    let result = scanner.scan(&request).await?;

    if result.is_truncated() {
        warn!(
            table = %request.table_name,
            count = result.count,
            "Scan returned a partial page; remaining items were not fetched"
        );
    }

    let body = serde_json::to_string(&result)?;
    info!(table = %request.table_name, count = result.count, "Scan complete");

    Ok(HttpResponse::ok(body))
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Any failure from [`handle`] becomes an invocation error.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    scanner: &S,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<HttpResponse, Error>
where
    S: TableScanner + ?Sized,
{
    let response = handle(scanner, config, &event.payload).await?;
    Ok(response)
}
