use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Mirror of the backend payload, coupled only by the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    pub message: String,
}

pub async fn fetch_message(endpoint: &str) -> Result<String, FetchError> {
    let data = reqwest::get(endpoint).await?.error_for_status()?.json::<DataResponse>().await?;
    Ok(data.message)
}
