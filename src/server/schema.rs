use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct MarketingRequest {
    pub prompt: String,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub status: String,
    pub generated_content: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdResponse {
    pub status: String,
    pub ad: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_ready: bool,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
