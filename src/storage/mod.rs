//! Table storage: the scan request/result types and the `TableScanner` seam

pub mod attribute;
pub mod dynamo;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;

use crate::errors::JobsError;

pub use dynamo::DynamoScanner;

/// One stored record, attribute name to value. The table has no fixed schema.
pub type Item = HashMap<String, AttributeValue>;

/// Parameters for a full-table scan. Only the table is ever set: no filter,
/// projection, limit or start key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub table_name: String,
}

impl ScanRequest {
    #[must_use]
    pub fn for_table(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
        }
    }
}

/// Raw output of a single scan call, passed through untouched.
///
/// Serializes with the service's field names so the response body matches
/// what the low-level DynamoDB API returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanResult {
    #[serde(serialize_with = "attribute::serialize_items")]
    pub items: Vec<Item>,
    pub count: i32,
    pub scanned_count: i32,
    /// Set by the store when the scan stopped at its page limit.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "attribute::serialize_key"
    )]
    pub last_evaluated_key: Option<Item>,
}

impl ScanResult {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

#[async_trait]
pub trait TableScanner: Send + Sync {
    /// Issues one scan call and returns whatever the store answered.
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, JobsError>;
}
