use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::enums::Feature;
use thiserror::Error;

use crate::model::api::QuotaErrorDto;

/// Entitlement refusals. Carries enough context for the client to render an
/// upgrade prompt rather than a bare 403.
#[derive(Error, Debug)]
pub enum EntitlementError {
    #[error("Daily limit reached for {feature:?}: {used}/{limit}")]
    QuotaExceeded {
        feature: Feature,
        used: i64,
        limit: i64,
    },
    #[error("Feature {feature:?} is not available on the current tier")]
    FeatureLocked { feature: Feature },
}

impl IntoResponse for EntitlementError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::QuotaExceeded {
                feature,
                used,
                limit,
            } => (
                StatusCode::FORBIDDEN,
                Json(QuotaErrorDto {
                    error: format!("Daily limit reached for {:?}", feature),
                    used: Some(used),
                    limit: Some(limit),
                }),
            )
                .into_response(),
            Self::FeatureLocked { feature } => (
                StatusCode::FORBIDDEN,
                Json(QuotaErrorDto {
                    error: format!("{:?} requires a higher subscription tier", feature),
                    used: None,
                    limit: None,
                }),
            )
                .into_response(),
        }
    }
}
