use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`. A missing key deserializes to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub answer: String,
}
