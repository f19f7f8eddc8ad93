use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub fn route_api() -> Router<AppState> {
    Router::new().route("/data", get(data))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    pub message: String,
}
impl Default for DataResponse {
    fn default() -> Self {
        Self { message: "Hello from the backend!".to_string() }
    }
}

/// Constructed fresh on every request, nothing is cached or persisted.
#[tracing::instrument]
pub async fn data() -> Json<DataResponse> {
    Json(DataResponse::default())
}
