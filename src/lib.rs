pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::HuggingFaceClient;
pub use config::{AppConfig, CliConfig};
pub use crate::core::assistant::MarketingAssistant;
pub use crate::core::extract::extract_ad;
pub use crate::core::prompt::{build_ad_prompt, AD_SENTINEL};
pub use utils::error::{AppError, Result};
