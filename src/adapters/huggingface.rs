use crate::config::BackendConfig;
use crate::domain::model::{GenerationOutput, GenerationParams};
use crate::domain::ports::TextGenerator;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Serialize)]
struct InferenceParameters<'a> {
    max_new_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
    return_full_text: bool,
}

#[derive(Deserialize)]
struct GeneratedItem {
    generated_text: String,
    #[serde(default)]
    details: Option<GenerationDetails>,
}

#[derive(Deserialize)]
struct GenerationDetails {
    finish_reason: Option<String>,
}

// Inference API 依模型與部署不同，回傳格式有三種
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<GeneratedItem>),
    Single(GeneratedItem),
    Text(String),
}

/// token 檢查用的模型與 prompt
pub const TOKEN_CHECK_MODEL: &str = "gpt2";
pub const TOKEN_CHECK_PROMPT: &str = "What is artificial intelligence?";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhoAmI {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// whoami 的結果，以及用同一個 token 跑一次短生成的結果
#[derive(Debug)]
pub struct TokenCheck {
    pub user: WhoAmI,
    pub inference: Result<GenerationOutput>,
}

impl From<GeneratedItem> for GenerationOutput {
    fn from(item: GeneratedItem) -> Self {
        match item.details {
            Some(details) => GenerationOutput::Detailed {
                generated_text: item.generated_text,
                finish_reason: details.finish_reason,
            },
            None => GenerationOutput::Text(item.generated_text),
        }
    }
}

/// Hugging Face Inference API client. One instance per process, shared via `Arc`.
pub struct HuggingFaceClient {
    client: Client,
    api_base: String,
    hub_base: String,
    model_id: String,
    api_token: String,
}

impl HuggingFaceClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            hub_base: config.hub_base.trim_end_matches('/').to_string(),
            model_id: config.model_id.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.api_base, self.model_id)
    }

    /// 檢查 token 是否有效
    pub async fn whoami(&self) -> Result<WhoAmI> {
        let url = format!("{}/api/whoami-v2", self.hub_base);
        tracing::debug!("Making whoami request to: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(backend_error(status.as_u16(), response.text().await?));
        }

        Ok(response.json::<WhoAmI>().await?)
    }

    /// 先確認 token 身分，通過後再確認它能呼叫推論。
    ///
    /// whoami 失敗直接回傳錯誤；推論失敗則放在 `TokenCheck::inference`。
    pub async fn check_token(&self) -> Result<TokenCheck> {
        let user = self.whoami().await?;
        let params = GenerationParams::new(50, 0.7);
        let inference = self.generate(TOKEN_CHECK_PROMPT, &params).await;
        Ok(TokenCheck { user, inference })
    }
}

fn backend_error(status: u16, body: String) -> AppError {
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => body,
    };
    AppError::Backend { status, message }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<GenerationOutput> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                stop: (!params.stop.is_empty()).then_some(params.stop.as_slice()),
                return_full_text: false,
            },
        };

        let url = self.model_url();
        tracing::debug!(
            "Inference request: model={}, max_new_tokens={}, temperature={}",
            self.model_id,
            params.max_new_tokens,
            params.temperature
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Inference response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(backend_error(status.as_u16(), error_text));
        }

        let text = response.text().await?;
        let parsed: InferenceResponse =
            serde_json::from_str(&text).map_err(|e| AppError::InvalidResponse {
                message: format!("{} (body: {})", e, text),
            })?;

        match parsed {
            InferenceResponse::Batch(items) => items
                .into_iter()
                .next()
                .map(GenerationOutput::from)
                .ok_or_else(|| AppError::InvalidResponse {
                    message: "empty generation list".to_string(),
                }),
            InferenceResponse::Single(item) => Ok(item.into()),
            InferenceResponse::Text(text) => Ok(GenerationOutput::Text(text)),
        }
    }
}
