pub mod assistant;
pub mod extract;
pub mod prompt;

pub use crate::domain::model::{
    AdRequest, GeneratedAd, GeneratedContent, GenerationDefaults, GenerationOutput,
    GenerationParams, GenerationSettings,
};
pub use crate::domain::ports::TextGenerator;
pub use crate::utils::error::Result;
