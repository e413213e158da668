use serde::{Deserialize, Serialize};

/// Proxy-integration response returned to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
}

impl HttpResponse {
    /// Returns a 200 OK response with the given body.
    #[must_use]
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
