use crate::core::extract::extract_ad;
use crate::core::prompt::{build_ad_prompt, AD_SENTINEL};
use crate::core::{
    AdRequest, GeneratedAd, GeneratedContent, GenerationParams, GenerationSettings, TextGenerator,
};
use crate::utils::error::Result;
use std::sync::Arc;

/// 串接 prompt 組裝、後端呼叫與結果擷取
#[derive(Clone)]
pub struct MarketingAssistant {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
}

impl MarketingAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_settings(generator, GenerationSettings::default())
    }

    pub fn with_settings(generator: Arc<dyn TextGenerator>, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    pub fn model_id(&self) -> &str {
        self.generator.model_id()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub async fn generate_ad(&self, request: &AdRequest) -> Result<GeneratedAd> {
        let product = request.product_description.trim();
        let theme = request.theme.trim();
        tracing::info!(product_description = %product, theme = %theme, "[Ad] Prompt variables");

        let prompt = build_ad_prompt(product, theme);
        tracing::debug!("[Ad] Prompt sent to model:\n{}", prompt);

        let params = GenerationParams::new(
            self.settings.ad.max_new_tokens,
            self.settings.ad.temperature,
        )
        .with_stop(AD_SENTINEL);

        let output = self.generator.generate(&prompt, &params).await.map_err(|e| {
            tracing::error!("[Ad] Error: {}", e);
            e
        })?;

        let raw = output.into_text();
        tracing::info!("[Ad] Raw model response: {:?}", raw);

        let text = extract_ad(&raw);
        tracing::info!("[Ad] Final ad text: {:?}", text);

        Ok(GeneratedAd { text })
    }

    /// 一般內容生成：prompt 與參數原樣轉給後端，不套模板也不截斷。
    ///
    /// 未提供或為 0 的參數會改用預設值。
    pub async fn generate_content(
        &self,
        prompt: &str,
        max_length: Option<u32>,
        temperature: Option<f32>,
    ) -> Result<GeneratedContent> {
        let defaults = self.settings.content;
        let max_new_tokens = max_length
            .filter(|n| *n > 0)
            .unwrap_or(defaults.max_new_tokens);
        let temperature = temperature
            .filter(|t| *t != 0.0)
            .unwrap_or(defaults.temperature);

        tracing::info!("[General] Prompt: {}", prompt);

        let params = GenerationParams::new(max_new_tokens, temperature);
        let output = self.generator.generate(prompt, &params).await.map_err(|e| {
            tracing::error!("[General] Error: {}", e);
            e
        })?;

        let text = output.into_text();
        tracing::info!("[General] Response: {}", text);

        Ok(GeneratedContent {
            text,
            max_new_tokens,
            temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenerationDefaults, GenerationOutput};
    use crate::utils::error::AppError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    struct MockGenerator {
        reply: std::result::Result<GenerationOutput, (u16, String)>,
        calls: Mutex<Vec<(String, GenerationParams)>>,
    }

    impl MockGenerator {
        fn replying(output: GenerationOutput) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(output),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16, message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err((status, message.to_string())),
                calls: Mutex::new(Vec::new()),
            })
        }

        async fn calls(&self) -> Vec<(String, GenerationParams)> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        fn model_id(&self) -> &str {
            "mock-model"
        }

        async fn generate(
            &self,
            prompt: &str,
            params: &GenerationParams,
        ) -> Result<GenerationOutput> {
            self.calls
                .lock()
                .await
                .push((prompt.to_string(), params.clone()));
            match &self.reply {
                Ok(output) => Ok(output.clone()),
                Err((status, message)) => Err(AppError::Backend {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_generate_ad_end_to_end() {
        let generator = MockGenerator::replying(GenerationOutput::Text(
            "Step lively.\n### END\nunused tail".to_string(),
        ));
        let assistant = MarketingAssistant::new(generator.clone());

        let ad = assistant
            .generate_ad(&AdRequest::new("Running shoes", "Sporty"))
            .await
            .unwrap();

        assert_eq!(ad.text, "Step lively.");

        let calls = generator.calls().await;
        assert_eq!(calls.len(), 1);
        let (prompt, params) = &calls[0];
        assert_eq!(prompt, &build_ad_prompt("Running shoes", "Sporty"));
        assert_eq!(params.max_new_tokens, 100);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.stop, vec![AD_SENTINEL.to_string()]);
    }

    #[tokio::test]
    async fn test_generate_ad_trims_inputs() {
        let generator = MockGenerator::replying(GenerationOutput::Detailed {
            generated_text: "  Sip smarter. ".to_string(),
            finish_reason: Some("length".to_string()),
        });
        let assistant = MarketingAssistant::new(generator.clone());

        let ad = assistant
            .generate_ad(&AdRequest::new("  Water bottle \n", " Eco "))
            .await
            .unwrap();

        assert_eq!(ad.text, "Sip smarter.");
        let calls = generator.calls().await;
        assert!(calls[0]
            .0
            .ends_with("Product: Water bottle\nTheme: Eco\nAd Copy:\n### END"));
    }

    #[tokio::test]
    async fn test_generate_ad_propagates_backend_failure() {
        let generator = MockGenerator::failing(503, "Model is currently loading");
        let assistant = MarketingAssistant::new(generator);

        let err = assistant
            .generate_ad(&AdRequest::new("Lamp", "Warm"))
            .await
            .unwrap_err();

        match err {
            AppError::Backend { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "Model is currently loading");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_content_passes_through() {
        let raw = "Once upon a time ### END and more";
        let generator = MockGenerator::replying(GenerationOutput::Text(raw.to_string()));
        let assistant = MarketingAssistant::new(generator.clone());

        let content = assistant
            .generate_content("Write a story", Some(64), Some(1.2))
            .await
            .unwrap();

        assert_eq!(content.text, raw);
        assert_eq!(content.max_new_tokens, 64);
        assert_eq!(content.temperature, 1.2);

        let calls = generator.calls().await;
        assert_eq!(calls[0].0, "Write a story");
        assert_eq!(calls[0].1, GenerationParams::new(64, 1.2));
    }

    #[tokio::test]
    async fn test_generate_content_defaults() {
        let generator = MockGenerator::replying(GenerationOutput::Text("ok".to_string()));
        let assistant = MarketingAssistant::new(generator.clone());

        let missing = assistant.generate_content("hi", None, None).await.unwrap();
        assert_eq!(missing.max_new_tokens, 500);
        assert_eq!(missing.temperature, 0.7);

        let zeros = assistant
            .generate_content("hi", Some(0), Some(0.0))
            .await
            .unwrap();
        assert_eq!(zeros.max_new_tokens, 500);
        assert_eq!(zeros.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_custom_settings_are_used() {
        let generator = MockGenerator::replying(GenerationOutput::Text("ok".to_string()));
        let settings = GenerationSettings {
            ad: GenerationDefaults {
                max_new_tokens: 40,
                temperature: 0.9,
            },
            content: GenerationDefaults {
                max_new_tokens: 200,
                temperature: 0.5,
            },
        };
        let assistant = MarketingAssistant::with_settings(generator.clone(), settings);

        assistant
            .generate_ad(&AdRequest::new("Pen", "Bold"))
            .await
            .unwrap();
        assistant.generate_content("hi", None, None).await.unwrap();

        let calls = generator.calls().await;
        assert_eq!(calls[0].1.max_new_tokens, 40);
        assert_eq!(calls[0].1.temperature, 0.9);
        assert_eq!(calls[1].1, GenerationParams::new(200, 0.5));
        assert_eq!(assistant.model_id(), "mock-model");
    }
}
