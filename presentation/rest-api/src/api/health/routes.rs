use chrono::{DateTime, Utc};
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub checked_at: DateTime<Utc>,
}

pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Liveness probe
    ///
    /// Answers while the process is serving requests. Neither the database
    /// nor the OpenAI API is contacted.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checked_at: Utc::now(),
        })
    }
}
