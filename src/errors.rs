use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobsError {
    #[error("Failed to scan table: {0}")]
    StorageError(String),

    #[error("Failed to serialize scan result: {0}")]
    SerializationError(String),
}

// Generic implementation for DynamoDB SDK errors
impl<E> From<SdkError<E>> for JobsError
where
    E: std::error::Error + 'static,
{
    fn from(error: SdkError<E>) -> Self {
        JobsError::StorageError(DisplayErrorContext(&error).to_string())
    }
}

impl From<serde_json::Error> for JobsError {
    fn from(error: serde_json::Error) -> Self {
        JobsError::SerializationError(error.to_string())
    }
}
