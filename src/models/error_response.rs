use serde::{self, Deserialize, Serialize};
use serde_json::Value;

/// Error envelope returned by the remote service alongside non-success statuses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub param: Option<String>,
    // String on most errors, integer on some gateway errors.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<Value>,
}

impl ErrorResponse {
    pub(crate) fn parse(body: &str) -> Option<ApiErrorDetail> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|response| response.error)
    }
}
