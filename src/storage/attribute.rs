//! DynamoDB JSON encoding for SDK attribute values.
//!
//! `aws_sdk_dynamodb::types::AttributeValue` has no `Serialize` impl, so scan
//! output is rendered here in the service's own wire shape: each attribute is
//! a single-key object tagged with its type (`{"S": "abc"}`, `{"N": "42"}`).
//! Numbers stay strings and binary values are base64, exactly as DynamoDB
//! sends them.

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serializer;
use serde::ser::Error as _;
use serde_json::{Map, Value, json};

use super::Item;
use crate::errors::JobsError;

/// Encodes a single attribute value.
///
/// # Errors
///
/// Returns `SerializationError` for an attribute type this SDK version does
/// not know about.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, JobsError> {
    let encoded = match value {
        AttributeValue::S(s) => json!({ "S": s }),
        AttributeValue::N(n) => json!({ "N": n }),
        AttributeValue::B(b) => json!({ "B": encode_blob(b) }),
        AttributeValue::Bool(b) => json!({ "BOOL": b }),
        AttributeValue::Null(n) => json!({ "NULL": n }),
        AttributeValue::Ss(values) => json!({ "SS": values }),
        AttributeValue::Ns(values) => json!({ "NS": values }),
        AttributeValue::Bs(values) => {
            let encoded: Vec<String> = values.iter().map(encode_blob).collect();
            json!({ "BS": encoded })
        }
        AttributeValue::L(values) => {
            let encoded = values
                .iter()
                .map(attribute_to_json)
                .collect::<Result<Vec<_>, _>>()?;
            json!({ "L": encoded })
        }
        AttributeValue::M(map) => json!({ "M": item_to_json(map)? }),
        other => {
            return Err(JobsError::SerializationError(format!(
                "unsupported attribute type: {other:?}"
            )));
        }
    };
    Ok(encoded)
}

/// Encodes a whole item (attribute name to value).
///
/// # Errors
///
/// Fails if any attribute in the item fails to encode.
pub fn item_to_json(item: &Item) -> Result<Map<String, Value>, JobsError> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_json(value)?)))
        .collect()
}

fn encode_blob(blob: &Blob) -> String {
    STANDARD.encode(blob.as_ref())
}

pub(crate) fn serialize_items<S>(items: &[Item], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let encoded = items
        .iter()
        .map(item_to_json)
        .collect::<Result<Vec<_>, _>>()
        .map_err(S::Error::custom)?;
    serializer.collect_seq(encoded)
}

pub(crate) fn serialize_key<S>(key: &Option<Item>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match key {
        Some(item) => {
            let encoded = item_to_json(item).map_err(S::Error::custom)?;
            serializer.serialize_some(&encoded)
        }
        None => serializer.serialize_none(),
    }
}
