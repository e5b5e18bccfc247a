use crate::core::AdRequest;
use crate::server::error::JsonBody;
use crate::server::schema::{
    AdResponse, ContentResponse, GenerationParameters, HealthResponse, MarketingRequest,
};
use crate::server::AppState;
use crate::utils::error::Result;
use axum::extract::State;
use axum::Json;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_ready: true,
        model: state.assistant.model_id().to_string(),
    })
}

pub async fn generate_content(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<MarketingRequest>,
) -> Result<Json<ContentResponse>> {
    let content = state
        .assistant
        .generate_content(&request.prompt, request.max_length, request.temperature)
        .await?;

    Ok(Json(ContentResponse {
        status: "success".to_string(),
        generated_content: content.text,
        parameters: GenerationParameters {
            max_length: content.max_new_tokens,
            temperature: content.temperature,
        },
    }))
}

pub async fn generate_ad(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AdRequest>,
) -> Result<Json<AdResponse>> {
    let ad = state.assistant.generate_ad(&request).await?;

    Ok(Json(AdResponse {
        status: "success".to_string(),
        ad: ad.text,
    }))
}
