use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::error::ErrorResponse;
use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
///
/// Provides liveness and database connectivity endpoints for load balancers
/// and monitoring tools.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Does not touch the
    /// database, so it stays green while the catalog is unreachable.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Database connectivity check
    ///
    /// Runs a trivial query against the catalog database and reports
    /// whether the connection is usable.
    #[oai(path = "/health/db", method = "get", tag = "ApiTags::Health")]
    async fn database_check(&self) -> DatabaseCheckResponse {
        match persistence::db::ping(&self.pool).await {
            Ok(()) => DatabaseCheckResponse::Ok(Json(HealthCheckResponse {
                status: "healthy".to_string(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })),
            Err(err) => DatabaseCheckResponse::ServiceUnavailable(Json(ErrorResponse {
                name: "DatabaseUnavailable".to_string(),
                message: err.to_string(),
            })),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DatabaseCheckResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
