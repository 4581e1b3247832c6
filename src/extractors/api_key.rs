use axum::{
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use serde::Deserialize;
use std::future::Future;
use std::sync::Arc;

use crate::{AppError, AppState};

#[derive(Debug, Deserialize)]
struct ApiKeyParam {
    api_key: Option<String>,
}

/// Extractor that runs the statistics access check before the handler body.
///
/// Rejecting here means a bad key never reaches the entry fetch. Credentials
/// are read from the Authorization header (Bearer), the X-API-Key header, or
/// the `api_key` query parameter, in that order.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAuth;

impl FromRequestParts<Arc<AppState>> for ApiKeyAuth {
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_owned);

        let header_key = parts
            .headers
            .get("X-API-Key")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let query_key = Query::<ApiKeyParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|query| query.0.api_key);

        let accepted = state.stats_guard.verify(
            bearer.as_deref(),
            header_key.as_deref(),
            query_key.as_deref(),
        );

        async move {
            if accepted {
                Ok(ApiKeyAuth)
            } else {
                tracing::warn!("statistics request rejected: invalid api key");
                Err(AppError::Unauthorized("invalid api key".to_string()))
            }
        }
    }
}
