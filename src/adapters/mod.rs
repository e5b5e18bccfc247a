// Adapters layer: concrete implementations for external systems.

pub mod huggingface;

pub use huggingface::{HuggingFaceClient, TokenCheck, WhoAmI};
