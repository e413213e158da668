use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use tracing::debug;

use super::{ScanRequest, ScanResult, TableScanner};
use crate::core::config::AppConfig;
use crate::errors::JobsError;

/// `TableScanner` backed by DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoScanner {
    // Client wraps an Arc so should be low cost to clone
    client: Client,
}

impl DynamoScanner {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Loads credentials from the default provider chain with the region
    /// pinned to the configured one.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&shared))
    }
}

#[async_trait]
impl TableScanner for DynamoScanner {
    async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, JobsError> {
        debug!(table = %request.table_name, "Sending DynamoDB scan");

        let output = self
            .client
            .scan()
            .table_name(&request.table_name)
            .send()
            .await?;

        Ok(output.into())
    }
}

impl From<ScanOutput> for ScanResult {
    fn from(output: ScanOutput) -> Self {
        Self {
            items: output.items.unwrap_or_default(),
            count: output.count,
            scanned_count: output.scanned_count,
            last_evaluated_key: output.last_evaluated_key,
        }
    }
}
