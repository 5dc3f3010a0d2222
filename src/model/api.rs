use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Error body for quota and tier refusals; `used`/`limit` are present for
/// numeric quotas so the client can render an upgrade prompt.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuotaErrorDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}
