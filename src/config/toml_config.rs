use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 選用的 TOML 設定檔，所有區段都可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub backend: Option<BackendSection>,
    pub ad: Option<GenerationSection>,
    pub content: Option<GenerationSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub model_id: Option<String>,
    pub api_base: Option<String>,
    pub hub_base: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    pub max_new_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HF_MODEL_ID})，找不到的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn backend(&self) -> BackendSection {
        self.backend.clone().unwrap_or_default()
    }

    pub fn ad(&self) -> GenerationSection {
        self.ad.clone().unwrap_or_default()
    }

    pub fn content(&self) -> GenerationSection {
        self.content.clone().unwrap_or_default()
    }
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        if let Some(backend) = &self.backend {
            if let Some(api_base) = &backend.api_base {
                validation::validate_url("backend.api_base", api_base)?;
            }
            if let Some(hub_base) = &backend.hub_base {
                validation::validate_url("backend.hub_base", hub_base)?;
            }
            if let Some(model_id) = &backend.model_id {
                validation::validate_non_empty_string("backend.model_id", model_id)?;
            }
            if let Some(timeout) = backend.timeout_seconds {
                validation::validate_positive_number("backend.timeout_seconds", timeout, 1)?;
            }
        }

        for (name, section) in [("ad", &self.ad), ("content", &self.content)] {
            if let Some(section) = section {
                if let Some(tokens) = section.max_new_tokens {
                    validation::validate_positive_number(
                        &format!("{}.max_new_tokens", name),
                        u64::from(tokens),
                        1,
                    )?;
                }
                if let Some(temperature) = section.temperature {
                    validation::validate_temperature(&format!("{}.temperature", name), temperature)?;
                }
            }
        }

        Ok(())
    }
}
