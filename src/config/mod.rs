pub mod toml_config;

use crate::domain::model::{GenerationDefaults, GenerationSettings};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::{GenerationSection, SettingsFile};

pub const DEFAULT_MODEL_ID: &str = "distilgpt2";
pub const DEFAULT_API_BASE: &str = "https://router.huggingface.co/hf-inference";
pub const DEFAULT_HUB_BASE: &str = "https://huggingface.co";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const TOKEN_ENV: &str = "HUGGINGFACEHUB_API_TOKEN";

#[derive(Debug, Clone, Parser)]
#[command(name = "marketing-assistant")]
#[command(about = "AI marketing assistant backed by the Hugging Face Inference API")]
pub struct CliConfig {
    #[arg(long, env = "MARKETING_ASSISTANT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    #[arg(long, env = "HF_MODEL_ID")]
    pub model: Option<String>,

    #[arg(long, env = "HF_API_BASE")]
    pub api_base: Option<String>,

    #[arg(long, env = "HF_HUB_BASE")]
    pub hub_base: Option<String>,

    #[arg(long, env = "HUGGINGFACEHUB_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Clone)]
pub struct BackendConfig {
    pub api_base: String,
    pub hub_base: String,
    pub model_id: String,
    pub api_token: String,
    pub timeout_seconds: u64,
}

// token 不能出現在日誌裡
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_base", &self.api_base)
            .field("hub_base", &self.hub_base)
            .field("model_id", &self.model_id)
            .field("api_token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 合併後的設定：命令列/環境變數 > 設定檔 > 內建預設值
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub generation: GenerationSettings,
}

fn merge_generation(section: GenerationSection, defaults: GenerationDefaults) -> GenerationDefaults {
    GenerationDefaults {
        max_new_tokens: section.max_new_tokens.unwrap_or(defaults.max_new_tokens),
        temperature: section.temperature.unwrap_or(defaults.temperature),
    }
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => {
                let settings = SettingsFile::from_file(path)?;
                settings.validate()?;
                settings
            }
            None => SettingsFile::default(),
        };
        Self::from_parts(cli, &settings)
    }

    pub fn from_parts(cli: &CliConfig, settings: &SettingsFile) -> Result<Self> {
        let api_token = validation::validate_required_field(TOKEN_ENV, &cli.api_token)?.clone();
        let backend = settings.backend();

        let config = Self {
            server: ServerConfig {
                host: cli.host.clone(),
                port: cli.port,
                static_dir: cli.static_dir.clone(),
            },
            backend: BackendConfig {
                api_base: cli
                    .api_base
                    .clone()
                    .or(backend.api_base)
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                hub_base: cli
                    .hub_base
                    .clone()
                    .or(backend.hub_base)
                    .unwrap_or_else(|| DEFAULT_HUB_BASE.to_string()),
                model_id: cli
                    .model
                    .clone()
                    .or(backend.model_id)
                    .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
                api_token,
                timeout_seconds: backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            },
            generation: GenerationSettings {
                ad: merge_generation(settings.ad(), GenerationDefaults::AD),
                content: merge_generation(settings.content(), GenerationDefaults::CONTENT),
            },
        };

        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.server.host)?;
        validation::validate_url("backend.api_base", &self.backend.api_base)?;
        validation::validate_url("backend.hub_base", &self.backend.hub_base)?;
        validation::validate_non_empty_string("backend.model_id", &self.backend.model_id)?;
        validation::validate_non_empty_string(TOKEN_ENV, &self.backend.api_token)?;
        validation::validate_positive_number(
            "backend.timeout_seconds",
            self.backend.timeout_seconds,
            1,
        )?;

        for (name, defaults) in [
            ("ad", self.generation.ad),
            ("content", self.generation.content),
        ] {
            validation::validate_positive_number(
                &format!("{}.max_new_tokens", name),
                u64::from(defaults.max_new_tokens),
                1,
            )?;
            validation::validate_temperature(&format!("{}.temperature", name), defaults.temperature)?;
        }

        Ok(())
    }
}
