use serde::{Deserialize, Serialize};

/// 廣告文案請求。舊版前端送的是 `add_theme`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRequest {
    pub product_description: String,
    #[serde(alias = "add_theme")]
    pub theme: String,
}

impl AdRequest {
    pub fn new(product_description: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            product_description: product_description.into(),
            theme: theme.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedAd {
    pub text: String,
}

/// 送到生成後端的參數
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl GenerationParams {
    pub fn new(max_new_tokens: u32, temperature: f32) -> Self {
        Self {
            max_new_tokens,
            temperature,
            stop: Vec::new(),
        }
    }

    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop.push(stop.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationDefaults {
    pub max_new_tokens: u32,
    pub temperature: f32,
}

impl GenerationDefaults {
    pub const AD: GenerationDefaults = GenerationDefaults {
        max_new_tokens: 100,
        temperature: 0.7,
    };

    pub const CONTENT: GenerationDefaults = GenerationDefaults {
        max_new_tokens: 500,
        temperature: 0.7,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub ad: GenerationDefaults,
    pub content: GenerationDefaults,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            ad: GenerationDefaults::AD,
            content: GenerationDefaults::CONTENT,
        }
    }
}

/// 後端回傳的結果，可能只有文字，也可能帶有細節
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    Text(String),
    Detailed {
        generated_text: String,
        finish_reason: Option<String>,
    },
}

impl GenerationOutput {
    pub fn into_text(self) -> String {
        match self {
            GenerationOutput::Text(text) => text,
            GenerationOutput::Detailed { generated_text, .. } => generated_text,
        }
    }
}

/// 一般內容生成的結果，附上實際使用的參數
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub text: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_request_accepts_legacy_theme_field() {
        let legacy: AdRequest = serde_json::from_str(
            r#"{"product_description": "Yoga mat", "add_theme": "Wellness"}"#,
        )
        .unwrap();
        let current: AdRequest =
            serde_json::from_str(r#"{"product_description": "Yoga mat", "theme": "Wellness"}"#)
                .unwrap();

        assert_eq!(legacy, current);
        assert_eq!(current.theme, "Wellness");
    }

    #[test]
    fn test_generation_output_normalizes_to_text() {
        let plain = GenerationOutput::Text("hello".to_string());
        let detailed = GenerationOutput::Detailed {
            generated_text: "hello".to_string(),
            finish_reason: Some("stop_sequence".to_string()),
        };

        assert_eq!(plain.into_text(), "hello");
        assert_eq!(detailed.into_text(), "hello");
    }

    #[test]
    fn test_params_skip_empty_stop() {
        let params = GenerationParams::new(500, 0.7);
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("stop").is_none());

        let params = params.with_stop("### END");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["stop"], serde_json::json!(["### END"]));
    }
}
